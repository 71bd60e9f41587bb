pub use super::command_log::Entity as CommandLog;
pub use super::discord_user::Entity as DiscordUser;
pub use super::giveaway_roll::Entity as GiveawayRoll;
pub use super::participation::Entity as Participation;
