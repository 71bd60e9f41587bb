//! `!help`: lists the commands usable in the current channel.

use std::sync::Arc;

use serenity::async_trait;

use crate::{
    model::{
        command::{CommandKind, CommandRequest, CommandResult},
        server_config::ServerConfigMap,
    },
    service::command::Command,
};

/// One help line per command, in display order.
const HELP_LINES: &[(CommandKind, &str)] = &[
    (CommandKind::Admin, "* `!admin`: Manage bot instance(s)."),
    (CommandKind::Help, "* `!help`: List available commands."),
    (
        CommandKind::MonthlyGiveaway,
        "* `!roll`, `!participate`, or `!giveaway`: Participate in the monthly giveaway.",
    ),
    (
        CommandKind::MonthlyLottery,
        "* `!lottery` or `!lotto`: Participate in the monthly lottery.",
    ),
    (
        CommandKind::Diceroll,
        "* `!diceroll` or `!roll MIN-MAX`: Roll a number between MIN and MAX (default 1-20).",
    ),
];

pub struct HelpCommand {
    servers: Arc<ServerConfigMap>,
}

impl HelpCommand {
    pub fn new(servers: Arc<ServerConfigMap>) -> Self {
        Self { servers }
    }
}

#[async_trait]
impl Command for HelpCommand {
    async fn execute(&self, request: &CommandRequest) -> CommandResult {
        let lines: Vec<&str> = HELP_LINES
            .iter()
            .filter(|(kind, _)| {
                self.servers
                    .is_command_enabled(*kind, request.guild_id, request.channel_id)
            })
            .map(|(_, line)| *line)
            .collect();

        if lines.is_empty() {
            return CommandResult::ok("");
        }

        CommandResult::ok(format!("Available commands:\n{}", lines.join("\n")))
    }
}
