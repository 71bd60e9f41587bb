use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Stored Discord IDs are always written from `u64` values, so this indicates corrupt
    /// data in the database.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Microsecond timestamp outside the range chrono can represent
    #[error("Timestamp {micros} (microseconds) is out of range")]
    InvalidTimestamp {
        /// The timestamp that failed to convert
        micros: i64,
    },

    /// A command is enabled in configuration but no handler was registered for it
    #[error("No handler registered for command {command}")]
    UnregisteredCommand {
        /// The command without a handler
        command: String,
    },
}
