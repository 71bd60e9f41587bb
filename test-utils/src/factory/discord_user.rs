//! Discord user factory for creating test user entities.

use crate::factory::helpers::next_discord_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test Discord users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = DiscordUserFactory::new(&db)
///     .discord_id("123456789")
///     .name("CustomUser")
///     .build()
///     .await?;
/// ```
pub struct DiscordUserFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    discord_id: String,
    name: String,
}

impl<'a, C: ConnectionTrait> DiscordUserFactory<'a, C> {
    /// Creates a new DiscordUserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: a fresh generated ID
    /// - name: `"user{id}"`
    pub fn new(db: &'a C) -> Self {
        let id = next_discord_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("user{}", id),
        }
    }

    /// Sets the Discord ID for the user.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the username for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discord_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_user::Model, DbErr> {
        entity::discord_user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord user with default values.
///
/// Shorthand for `DiscordUserFactory::new(db).build().await`.
pub async fn create_discord_user<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::discord_user::Model, DbErr> {
    DiscordUserFactory::new(db).build().await
}
