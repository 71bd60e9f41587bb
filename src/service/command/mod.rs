//! Registered chat commands.
//!
//! Each command implements `Command` and turns a parsed request into a status plus the text
//! sent back. Commands never send messages themselves; the dispatcher owns the reply.

pub mod admin;
pub mod dice_roll;
pub mod help;
pub mod monthly_draw;

use serenity::async_trait;

use crate::model::command::{CommandRequest, CommandResult};

/// A command the dispatcher can route requests to.
#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(&self, request: &CommandRequest) -> CommandResult;
}

#[cfg(test)]
pub(crate) mod test;
