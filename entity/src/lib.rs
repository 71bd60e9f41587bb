//! `SeaORM` Entity definitions for the advice bot database.

pub mod prelude;

pub mod command_log;
pub mod discord_user;
pub mod giveaway_roll;
pub mod participation;
