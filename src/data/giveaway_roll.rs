//! Roll audit repository.
//!
//! Every roll of a successful participation is stored with its position in the draw, so the
//! outcome a user was shown can be reconstructed later.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::giveaway_roll::{CreateGiveawayRollsParam, GiveawayRoll};

/// Repository providing database operations for roll audit rows.
pub struct GiveawayRollRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GiveawayRollRepository<'a, C> {
    /// Creates a new GiveawayRollRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one row per prize, numbering them by draw order starting at zero.
    ///
    /// Meant to run inside the participation transaction so audit rows and the participation
    /// record are committed together.
    ///
    /// # Returns
    /// - `Ok(Vec<GiveawayRoll>)` - The inserted rows in draw order
    /// - `Err(DbErr)` - Database error during insert, including a duplicate
    ///   (activity, user, timestamp, sequence) row
    pub async fn create_many(
        &self,
        param: CreateGiveawayRollsParam,
    ) -> Result<Vec<GiveawayRoll>, DbErr> {
        let discord_user_id = param.discord_user_id.to_string();
        let mut rolls = Vec::with_capacity(param.prizes.len());

        for (sequence_index, prize) in param.prizes.into_iter().enumerate() {
            let entity = entity::giveaway_roll::ActiveModel {
                activity: ActiveValue::Set(param.activity.clone()),
                discord_user_id: ActiveValue::Set(discord_user_id.clone()),
                timestamp_micros: ActiveValue::Set(param.timestamp_micros),
                sequence_index: ActiveValue::Set(sequence_index as i32),
                prize: ActiveValue::Set(prize),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            rolls.push(GiveawayRoll::from_entity(entity));
        }

        Ok(rolls)
    }

    /// Gets every roll a user made in an activity, oldest participation first.
    pub async fn get_by_user(
        &self,
        activity: &str,
        discord_user_id: u64,
    ) -> Result<Vec<GiveawayRoll>, DbErr> {
        let entities = entity::prelude::GiveawayRoll::find()
            .filter(entity::giveaway_roll::Column::Activity.eq(activity))
            .filter(entity::giveaway_roll::Column::DiscordUserId.eq(discord_user_id.to_string()))
            .order_by_asc(entity::giveaway_roll::Column::TimestampMicros)
            .order_by_asc(entity::giveaway_roll::Column::SequenceIndex)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GiveawayRoll::from_entity).collect())
    }
}
