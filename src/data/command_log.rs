//! Command audit log repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::command_log::CreateCommandLogParam;

/// Repository providing database operations for the command log.
pub struct CommandLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommandLogRepository<'a, C> {
    /// Creates a new CommandLogRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an executed command.
    ///
    /// A message that was already logged (e.g. redelivered by the gateway) only has its
    /// timestamp refreshed; the original content and status are kept.
    ///
    /// # Returns
    /// - `Ok(entity::command_log::Model)` - The stored log row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateCommandLogParam,
    ) -> Result<entity::command_log::Model, DbErr> {
        entity::prelude::CommandLog::insert(entity::command_log::ActiveModel {
            message_id: ActiveValue::Set(param.message_id.to_string()),
            timestamp_micros: ActiveValue::Set(param.timestamp_micros),
            discord_user_id: ActiveValue::Set(param.discord_user_id.to_string()),
            command: ActiveValue::Set(param.command),
            command_status: ActiveValue::Set(param.status.code()),
        })
        .on_conflict(
            OnConflict::column(entity::command_log::Column::MessageId)
                .update_column(entity::command_log::Column::TimestampMicros)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a logged command by message ID.
    pub async fn find_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<entity::command_log::Model>, DbErr> {
        entity::prelude::CommandLog::find_by_id(message_id.to_string())
            .one(self.db)
            .await
    }
}
