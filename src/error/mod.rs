//! Error types and command-result mapping.
//!
//! This module provides the application's error hierarchy and the conversion that turns
//! an unexpected failure into the generic `INTERNAL` reply a user sees. The `AppError` enum
//! is the top-level error type wrapping domain-specific errors; startup failures propagate
//! out of `main` and stop the process.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, internal::InternalError},
    model::command::{CommandResult, CommandStatus},
};

/// Message sent to users when a command fails for reasons they cannot act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic conversion so `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup, environment loading, or table construction.
    ///
    /// Always fatal at startup; the bot refuses to connect with an invalid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Reported to users as a generic failure with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal invariant violation indicating a bug or corrupt data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts an application error into a user-facing command result.
///
/// Logs the full error for diagnostics and returns `INTERNAL` with a generic message so
/// database or Discord details never leak into chat.
impl From<AppError> for CommandResult {
    fn from(err: AppError) -> Self {
        tracing::error!("Command failed: {}", err);

        CommandResult::new(CommandStatus::Internal, GENERIC_FAILURE_MESSAGE)
    }
}
