//! Discord user data repository.
//!
//! Keeps the most recently seen username for every user who has participated in a draw or
//! had a command logged.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::{
    error::AppError,
    model::discord_user::{DiscordUser, UpsertDiscordUserParam},
};

/// Repository providing database operations for Discord users.
pub struct DiscordUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordUserRepository<'a, C> {
    /// Creates a new DiscordUserRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user or updates the stored name of an existing one.
    ///
    /// # Arguments
    /// - `param` - Discord ID and current username
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertDiscordUserParam) -> Result<DiscordUser, AppError> {
        let entity = entity::prelude::DiscordUser::insert(entity::discord_user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
        })
        .on_conflict(
            OnConflict::column(entity::discord_user::Column::DiscordId)
                .update_column(entity::discord_user::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordUser::from_entity(entity)
    }

    /// Finds a user by Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordUser))` - User found
    /// - `Ok(None)` - The user has never been recorded
    /// - `Err(AppError)` - Database error, or a stored ID that is not a valid u64
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<DiscordUser>, AppError> {
        let entity = entity::prelude::DiscordUser::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(DiscordUser::from_entity).transpose()
    }
}
