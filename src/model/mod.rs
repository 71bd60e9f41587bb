//! Domain models and operation-specific parameter types.
//!
//! Models are plain data shared between the service and data layers. Entity models never
//! leave the repositories; they are converted with `from_entity` at the boundary.

pub mod command;
pub mod command_log;
pub mod discord_user;
pub mod draw;
pub mod giveaway_roll;
pub mod message;
pub mod participation;
pub mod server_config;
