//! Process configuration.
//!
//! Secrets and deployment settings come from the environment (optionally via `.env`); the
//! per-guild command layout, administrators, and draw tables come from a JSON file.

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    error::{config::ConfigError, AppError},
    model::{
        draw::{default_giveaway, default_lottery, DrawSpec},
        server_config::ServerConfig,
    },
};

const DEFAULT_BOT_CONFIG_PATH: &str = "config/bot.json";

/// Deployment environment the bot runs in.
///
/// Non-production replies are tagged with the environment name, and `--force` is refused
/// in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotEnv {
    Dev,
    Prod,
}

impl BotEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }

    pub fn is_prod(&self) -> bool {
        *self == Self::Prod
    }
}

impl fmt::Display for BotEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotEnv {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "BOT_ENV".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    pub env: BotEnv,
    pub bot_config_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let env = match std::env::var("BOT_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => BotEnv::Dev,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            env,
            bot_config_path: std::env::var("BOT_CONFIG_PATH")
                .unwrap_or_else(|_| DEFAULT_BOT_CONFIG_PATH.to_string()),
        })
    }
}

/// Draw definitions, defaulting to the built-in giveaway and lottery.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DrawsConfig {
    #[serde(default = "default_giveaway")]
    pub giveaway: DrawSpec,
    #[serde(default = "default_lottery")]
    pub lottery: DrawSpec,
}

impl Default for DrawsConfig {
    fn default() -> Self {
        Self {
            giveaway: default_giveaway(),
            lottery: default_lottery(),
        }
    }
}

/// Contents of the bot configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BotConfig {
    /// Discord user IDs allowed to use administrative commands and flags.
    #[serde(default)]
    pub admin_user_ids: Vec<u64>,
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
    #[serde(default)]
    pub draws: DrawsConfig,
}

impl BotConfig {
    /// Reads and parses the configuration file at `path`.
    ///
    /// # Returns
    /// - `Ok(BotConfig)` - Parsed configuration
    /// - `Err(ConfigError::ReadFile)` - The file could not be read
    /// - `Err(ConfigError::ParseFile)` - The file is not valid configuration JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
