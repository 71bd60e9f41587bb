use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds an unsupported value.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
    },

    /// The bot configuration file could not be read.
    #[error("Failed to read bot configuration file {path:?}: {source}")]
    ReadFile {
        /// Path that was read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The bot configuration file is not valid JSON for the expected schema.
    #[error("Failed to parse bot configuration: {0}")]
    ParseFile(#[from] serde_json::Error),

    /// A drop table contains no entries.
    #[error("Drop table must contain at least one entry")]
    EmptyDropTable,

    /// A drop table entry has a weight that is zero, negative, or not finite.
    #[error("Drop table weight {weight} at index {index} must be positive")]
    InvalidWeight {
        /// Position of the offending entry within its table
        index: usize,
        /// The offending weight
        weight: f64,
    },

    /// The weights of a drop table do not total 1.
    #[error("Drop table weights must total 1, got {total}")]
    WeightsDoNotTotalOne {
        /// Sum of all weights in the table
        total: f64,
    },

    /// A draw definition is unusable, such as one with zero rolls.
    #[error("Invalid draw '{activity}': {reason}")]
    InvalidDraw {
        /// Activity identifier of the draw
        activity: String,
        /// Why the draw was rejected
        reason: String,
    },
}
