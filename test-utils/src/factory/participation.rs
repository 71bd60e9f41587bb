//! Participation factory for seeding last-participation records.

use crate::factory::helpers::next_discord_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating participation records with customizable fields.
///
/// Defaults to a fresh user id and a timestamp of zero (the Unix epoch), which is older
/// than any realistic request and therefore never blocks eligibility.
pub struct ParticipationFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    activity: String,
    discord_user_id: String,
    last_participation_micros: i64,
}

impl<'a, C: ConnectionTrait> ParticipationFactory<'a, C> {
    /// Creates a new ParticipationFactory for the given activity.
    pub fn new(db: &'a C, activity: impl Into<String>) -> Self {
        Self {
            db,
            activity: activity.into(),
            discord_user_id: next_discord_id().to_string(),
            last_participation_micros: 0,
        }
    }

    /// Sets the Discord user ID the record belongs to.
    pub fn discord_user_id(mut self, discord_user_id: impl Into<String>) -> Self {
        self.discord_user_id = discord_user_id.into();
        self
    }

    /// Sets the last participation timestamp in microseconds since the epoch.
    pub fn last_participation_micros(mut self, micros: i64) -> Self {
        self.last_participation_micros = micros;
        self
    }

    /// Builds and inserts the participation record.
    ///
    /// # Returns
    /// - `Ok(entity::participation::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::participation::Model, DbErr> {
        entity::participation::ActiveModel {
            activity: ActiveValue::Set(self.activity),
            discord_user_id: ActiveValue::Set(self.discord_user_id),
            last_participation_micros: ActiveValue::Set(self.last_participation_micros),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a participation record for a specific user and timestamp.
pub async fn create_participation<C: ConnectionTrait>(
    db: &C,
    activity: &str,
    discord_user_id: u64,
    last_participation_micros: i64,
) -> Result<entity::participation::Model, DbErr> {
    ParticipationFactory::new(db, activity)
        .discord_user_id(discord_user_id.to_string())
        .last_participation_micros(last_participation_micros)
        .build()
        .await
}
