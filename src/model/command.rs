//! Command request and result models.

use serde::{Deserialize, Serialize};

/// Outcome category of a processed command.
///
/// Numeric codes follow the canonical status codes (OK = 0, INVALID_ARGUMENT = 3, ...) and
/// are what the command log stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Ok,
    InvalidArgument,
    NotFound,
    PermissionDenied,
    Internal,
}

impl CommandStatus {
    /// Returns the numeric status code persisted in the command log.
    pub fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::InvalidArgument => 3,
            Self::NotFound => 5,
            Self::PermissionDenied => 7,
            Self::Internal => 13,
        }
    }
}

/// Result of executing a command: a status plus the text sent back to the channel.
///
/// An empty response means nothing is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub response: String,
}

impl CommandResult {
    pub fn new(status: CommandStatus, response: impl Into<String>) -> Self {
        Self {
            status,
            response: response.into(),
        }
    }

    pub fn ok(response: impl Into<String>) -> Self {
        Self::new(CommandStatus::Ok, response)
    }

    pub fn invalid_argument(response: impl Into<String>) -> Self {
        Self::new(CommandStatus::InvalidArgument, response)
    }

    pub fn permission_denied(response: impl Into<String>) -> Self {
        Self::new(CommandStatus::PermissionDenied, response)
    }
}

/// Registered commands that can be enabled per guild and channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Admin,
    Help,
    MonthlyGiveaway,
    MonthlyLottery,
    Diceroll,
}

/// The author of an inbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    /// Discord user ID.
    pub id: u64,
    /// Discord username, recorded alongside participation.
    pub name: String,
    /// Mention markup (`<@id>`) used in replies.
    pub mention: String,
    /// Names of the author's roles in the guild the message was sent in.
    pub role_names: Vec<String>,
}

/// A parsed command ready for execution by a registered handler.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub message_id: u64,
    pub author: Author,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    /// Raw message content.
    pub content: String,
    /// Time the message was received, in microseconds since the Unix epoch.
    pub timestamp_micros: i64,
    /// Tokenized arguments; `argv[0]` is the command word itself.
    pub argv: Vec<String>,
    /// Whether the author is a configured bot administrator.
    pub is_admin: bool,
}

impl CommandRequest {
    /// Returns true when the given literal argument appears after the command word.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.argv.iter().skip(1).any(|arg| arg == flag)
    }
}
