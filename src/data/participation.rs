//! Participation data repository.
//!
//! Stores one last-participation timestamp per (activity, user). Records are created on
//! the first successful participation, overwritten on every later one, and never deleted.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::participation::{
    ParticipationKey, ParticipationRecord, UpsertParticipationParam,
};

/// Repository providing database operations for participation records.
pub struct ParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    /// Creates a new ParticipationRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the participation record for a key.
    ///
    /// # Arguments
    /// - `key` - Activity and Discord user ID to look up
    ///
    /// # Returns
    /// - `Ok(Some(ParticipationRecord))` - The user has participated before
    /// - `Ok(None)` - No participation has been recorded for the key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, key: &ParticipationKey) -> Result<Option<ParticipationRecord>, DbErr> {
        let entity = entity::prelude::Participation::find_by_id((
            key.activity.clone(),
            key.discord_user_id.to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(entity.map(|entity| ParticipationRecord::from_entity(key.clone(), entity)))
    }

    /// Records a participation, replacing any previous timestamp for the same key.
    ///
    /// # Arguments
    /// - `param` - Key and the new last participation timestamp
    ///
    /// # Returns
    /// - `Ok(ParticipationRecord)` - The stored record
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertParticipationParam) -> Result<ParticipationRecord, DbErr> {
        let entity = entity::prelude::Participation::insert(entity::participation::ActiveModel {
            activity: ActiveValue::Set(param.key.activity.clone()),
            discord_user_id: ActiveValue::Set(param.key.discord_user_id.to_string()),
            last_participation_micros: ActiveValue::Set(param.last_participation_micros),
        })
        .on_conflict(
            OnConflict::columns([
                entity::participation::Column::Activity,
                entity::participation::Column::DiscordUserId,
            ])
            .update_column(entity::participation::Column::LastParticipationMicros)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ParticipationRecord::from_entity(param.key, entity))
    }
}
