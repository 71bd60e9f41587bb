//! `!admin`: instance management for configured administrators.

use std::sync::Arc;

use serenity::async_trait;
use tokio::sync::Notify;

use crate::{
    model::command::{CommandRequest, CommandResult},
    service::{command::Command, instance::InstanceInfo},
};

pub const USAGE: &str = "\nUsage:\n  `!admin list-instances`\n  `!admin kill <instance_id>`\n";
pub const NOT_AUTHORIZED: &str = "You are not authorized to use this command.";

pub struct AdminCommand {
    instance: InstanceInfo,
    shutdown: Arc<Notify>,
}

impl AdminCommand {
    /// Creates the command; `shutdown` is notified when this instance is killed.
    pub fn new(instance: InstanceInfo, shutdown: Arc<Notify>) -> Self {
        Self { instance, shutdown }
    }
}

#[async_trait]
impl Command for AdminCommand {
    async fn execute(&self, request: &CommandRequest) -> CommandResult {
        if !request.is_admin {
            return CommandResult::permission_denied(NOT_AUTHORIZED);
        }

        let args: Vec<&str> = request.argv.iter().skip(1).map(String::as_str).collect();

        match args.as_slice() {
            ["list-instances", ..] => CommandResult::ok(self.instance.describe()),
            ["kill", instance_id] => {
                // Every instance sees the command; only the named one stops.
                if *instance_id == self.instance.id {
                    tracing::warn!(
                        "Shutting down instance {}: requested by admin {}",
                        self.instance.id,
                        request.author.id
                    );
                    self.shutdown.notify_one();
                }
                CommandResult::ok("")
            }
            _ => CommandResult::ok(USAGE),
        }
    }
}
