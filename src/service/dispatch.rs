//! Routing of inbound chat messages to commands.
//!
//! Processing order for a `!word` message:
//! 1. easter eggs
//! 2. ignore channels the bot does not watch
//! 3. reject unknown commands and commands not enabled in the channel
//! 4. reject overlong messages
//! 5. honor `--env=<env>` targeting
//! 6. execute, log to the command log, and reply

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::BotEnv,
    data::{command_log::CommandLogRepository, discord_user::DiscordUserRepository},
    error::{internal::InternalError, AppError},
    model::{
        command::{CommandKind, CommandRequest, CommandResult},
        command_log::CreateCommandLogParam,
        discord_user::UpsertDiscordUserParam,
        message::InboundMessage,
        server_config::ServerConfigMap,
    },
    service::{
        command::Command,
        easter_egg::{EasterEggContext, EasterEggs},
    },
    util::args::split,
};

const COMMAND_PREFIX: char = '!';
const MAX_MESSAGE_LENGTH: usize = 255;
const ENV_FLAG_PREFIX: &str = "--env=";

/// Extracts the lowercase command word from `!word ...`.
///
/// Returns `None` for anything that is not a single-line command.
pub fn parse_command(content: &str) -> Option<String> {
    if content.contains('\n') {
        return None;
    }

    let rest = content.strip_prefix(COMMAND_PREFIX)?;
    let word: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// Maps a command word to the command it invokes.
pub fn resolve_alias(word: &str) -> Option<CommandKind> {
    match word {
        "admin" => Some(CommandKind::Admin),
        "help" => Some(CommandKind::Help),
        "roll" | "participate" | "giveaway" | "gimme" | "gimmegimmegimme" => {
            Some(CommandKind::MonthlyGiveaway)
        }
        "lottery" | "lotto" => Some(CommandKind::MonthlyLottery),
        "diceroll" => Some(CommandKind::Diceroll),
        _ => None,
    }
}

/// Environment named by an `--env=<env>` argument, if the argument is one.
fn requested_env(arg: &str) -> Option<&str> {
    let env = arg.strip_prefix(ENV_FLAG_PREFIX)?;
    let valid = !env.is_empty() && env.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    valid.then_some(env)
}

/// Routes messages to registered commands and produces the reply to send.
pub struct Dispatcher {
    db: DatabaseConnection,
    env: BotEnv,
    servers: Arc<ServerConfigMap>,
    admins: HashSet<u64>,
    easter_eggs: EasterEggs,
    commands: HashMap<CommandKind, Arc<dyn Command>>,
}

impl Dispatcher {
    pub fn new(
        db: DatabaseConnection,
        env: BotEnv,
        servers: Arc<ServerConfigMap>,
        admins: HashSet<u64>,
        easter_eggs: EasterEggs,
    ) -> Self {
        Self {
            db,
            env,
            servers,
            admins,
            easter_eggs,
            commands: HashMap::new(),
        }
    }

    /// Registers the handler for a command, replacing any previous one.
    pub fn register(mut self, kind: CommandKind, command: Arc<dyn Command>) -> Self {
        self.commands.insert(kind, command);
        self
    }

    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admins.contains(&user_id)
    }

    /// Prefixes non-production replies with the environment; empty replies are not sent.
    pub fn decorate_response(&self, response: &str) -> Option<String> {
        if response.is_empty() {
            return None;
        }

        if self.env.is_prod() {
            Some(response.to_string())
        } else {
            Some(format!("[{}]\n{}", self.env, response))
        }
    }

    /// Processes one inbound message.
    ///
    /// # Returns
    /// - `Some(String)` - Reply to send in the message's channel
    /// - `None` - The message is ignored or produced no reply
    pub async fn dispatch(&self, message: &InboundMessage) -> Option<String> {
        let word = parse_command(&message.content)?;

        tracing::info!(
            "Processing command {} (message {}, author {} ({}), guild {:?}, channel {})",
            word,
            message.message_id,
            message.author.name,
            message.author.id,
            message.guild_id,
            message.channel_id
        );

        let is_admin = self.is_admin(message.author.id);
        let guild_id = message.guild_id;
        let channel_id = message.channel_id;

        let easter_egg = self.easter_eggs.respond(
            &message.content,
            &EasterEggContext {
                author: &message.author,
                is_admin,
                giveaway_enabled: self.servers.is_command_enabled(
                    CommandKind::MonthlyGiveaway,
                    guild_id,
                    channel_id,
                ),
            },
        );
        if let Some(reply) = easter_egg {
            tracing::info!("Processed message {} as easter egg", message.message_id);
            return self.decorate_response(&reply);
        }

        if !self.servers.is_channel_watched(guild_id, channel_id) {
            tracing::info!("Ignoring message {}: unexpected channel", message.message_id);
            return None;
        }

        let Some(mut kind) = resolve_alias(&word) else {
            tracing::info!("Rejecting message {}: unrecognized command", message.message_id);
            return self.decorate_response(&format!("Unrecognized command: {COMMAND_PREFIX}{word}"));
        };

        // `!roll` doubles as the dice roll wherever that command is enabled.
        if word == "roll"
            && self
                .servers
                .is_command_enabled(CommandKind::Diceroll, guild_id, channel_id)
        {
            kind = CommandKind::Diceroll;
        }

        if !self.servers.is_command_enabled(kind, guild_id, channel_id) {
            tracing::info!("Rejecting message {}: not enabled", message.message_id);
            return self.decorate_response(&format!(
                "You cannot use {COMMAND_PREFIX}{word} in this channel."
            ));
        }

        if message.content.chars().count() > MAX_MESSAGE_LENGTH {
            tracing::info!("Rejecting message {}: too long", message.message_id);
            return self.decorate_response("Message rejected: too long (max 255 chars)");
        }

        let result = match split(&message.content) {
            Ok(mut argv) => {
                if let Some(index) = argv.iter().position(|arg| requested_env(arg).is_some()) {
                    if requested_env(&argv[index]) != Some(self.env.as_str()) {
                        tracing::info!("Ignoring message {}: wrong env", message.message_id);
                        return None;
                    }
                    argv.remove(index);
                }

                self.execute(kind, message, argv, is_admin).await
            }
            Err(err) => CommandResult::invalid_argument(format!("Unable to parse arguments: {err}")),
        };

        if let Err(err) = self.log_command(message, &result).await {
            tracing::error!("Failed to log command for message {}: {}", message.message_id, err);
        }

        tracing::info!(
            "Processed message {} ({:?}): {}",
            message.message_id,
            result.status,
            result.response
        );

        self.decorate_response(&result.response)
    }

    async fn execute(
        &self,
        kind: CommandKind,
        message: &InboundMessage,
        argv: Vec<String>,
        is_admin: bool,
    ) -> CommandResult {
        let Some(command) = self.commands.get(&kind) else {
            return AppError::from(InternalError::UnregisteredCommand {
                command: format!("{kind:?}"),
            })
            .into();
        };

        let request = CommandRequest {
            message_id: message.message_id,
            author: message.author.clone(),
            guild_id: message.guild_id,
            channel_id: message.channel_id,
            content: message.content.clone(),
            timestamp_micros: message.timestamp_micros,
            argv,
            is_admin,
        };

        command.execute(&request).await
    }

    /// Records the command and its author in one transaction.
    async fn log_command(
        &self,
        message: &InboundMessage,
        result: &CommandResult,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        DiscordUserRepository::new(&txn)
            .upsert(UpsertDiscordUserParam {
                discord_id: message.author.id,
                name: message.author.name.clone(),
            })
            .await?;
        CommandLogRepository::new(&txn)
            .create(CreateCommandLogParam {
                message_id: message.message_id,
                timestamp_micros: message.timestamp_micros,
                discord_user_id: message.author.id,
                command: message.content.clone(),
                status: result.status,
            })
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod test;
