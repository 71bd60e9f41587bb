//! Command audit log parameters.

use crate::model::command::CommandStatus;

/// Parameters for logging an executed command.
#[derive(Debug, Clone)]
pub struct CreateCommandLogParam {
    pub message_id: u64,
    pub timestamp_micros: i64,
    pub discord_user_id: u64,
    /// Full message content as sent.
    pub command: String,
    pub status: CommandStatus,
}
