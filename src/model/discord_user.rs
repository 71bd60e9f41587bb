//! Discord user domain models and parameters.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Discord user known to the bot, with the most recently seen username.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordUser {
    /// Discord ID of the user.
    pub discord_id: u64,
    /// Username at the time of the last recorded participation.
    pub name: String,
}

impl DiscordUser {
    /// Converts an entity model to a Discord user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::discord_user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
        })
    }
}

/// Parameters for inserting or renaming a Discord user.
#[derive(Debug, Clone)]
pub struct UpsertDiscordUserParam {
    pub discord_id: u64,
    pub name: String,
}
