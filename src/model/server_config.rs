//! Per-guild command enablement.
//!
//! Each guild lists the commands it enables and the channels they may be used in. A guild
//! missing from the configuration is ignored entirely, as are direct messages.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::command::CommandKind;

/// Channels a command is enabled in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChannelScope {
    /// Enables the command in every channel of the guild.
    #[serde(default)]
    pub all_channels: bool,
    /// Enables the command only in these channel IDs.
    #[serde(default)]
    pub specific_channels: Vec<u64>,
}

impl ChannelScope {
    pub fn includes(&self, channel_id: u64) -> bool {
        self.all_channels || self.specific_channels.contains(&channel_id)
    }
}

/// Enablement of one command within a guild.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandConfig {
    pub command: CommandKind,
    #[serde(default)]
    pub channels: ChannelScope,
}

/// Command configuration for a single guild.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub guild_id: u64,
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

/// Lookup of server configurations keyed by guild ID.
#[derive(Debug, Clone, Default)]
pub struct ServerConfigMap {
    servers: HashMap<u64, ServerConfig>,
}

impl ServerConfigMap {
    pub fn new(servers: Vec<ServerConfig>) -> Self {
        Self {
            servers: servers
                .into_iter()
                .map(|server| (server.guild_id, server))
                .collect(),
        }
    }

    /// Checks whether the bot watches the channel at all.
    ///
    /// A channel is watched when any command is enabled in it. This decides whether the bot
    /// responds to unknown or disabled commands, while `is_command_enabled` decides whether
    /// a known command may run.
    pub fn is_channel_watched(&self, guild_id: Option<u64>, channel_id: u64) -> bool {
        self.commands_for(guild_id)
            .iter()
            .any(|config| config.channels.includes(channel_id))
    }

    /// Checks whether a command is enabled in the given channel.
    ///
    /// `Help` is enabled wherever the channel is watched.
    pub fn is_command_enabled(
        &self,
        command: CommandKind,
        guild_id: Option<u64>,
        channel_id: u64,
    ) -> bool {
        if command == CommandKind::Help {
            return self.is_channel_watched(guild_id, channel_id);
        }

        self.commands_for(guild_id)
            .iter()
            .any(|config| config.command == command && config.channels.includes(channel_id))
    }

    fn commands_for(&self, guild_id: Option<u64>) -> &[CommandConfig] {
        guild_id
            .and_then(|id| self.servers.get(&id))
            .map(|server| server.commands.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUILD: u64 = 480809905138171924;
    const GIVEAWAY_CHANNEL: u64 = 100;
    const DICE_CHANNEL: u64 = 200;

    fn config() -> ServerConfigMap {
        ServerConfigMap::new(vec![ServerConfig {
            guild_id: GUILD,
            commands: vec![
                CommandConfig {
                    command: CommandKind::MonthlyGiveaway,
                    channels: ChannelScope {
                        all_channels: false,
                        specific_channels: vec![GIVEAWAY_CHANNEL],
                    },
                },
                CommandConfig {
                    command: CommandKind::Diceroll,
                    channels: ChannelScope {
                        all_channels: false,
                        specific_channels: vec![DICE_CHANNEL],
                    },
                },
            ],
        }])
    }

    #[test]
    fn enables_command_only_in_listed_channels() {
        let config = config();

        assert!(config.is_command_enabled(
            CommandKind::MonthlyGiveaway,
            Some(GUILD),
            GIVEAWAY_CHANNEL
        ));
        assert!(!config.is_command_enabled(
            CommandKind::MonthlyGiveaway,
            Some(GUILD),
            DICE_CHANNEL
        ));
        assert!(!config.is_command_enabled(CommandKind::Admin, Some(GUILD), GIVEAWAY_CHANNEL));
    }

    #[test]
    fn help_follows_watched_channels() {
        let config = config();

        assert!(config.is_command_enabled(CommandKind::Help, Some(GUILD), DICE_CHANNEL));
        assert!(!config.is_command_enabled(CommandKind::Help, Some(GUILD), 999));
    }

    #[test]
    fn ignores_unknown_guilds_and_direct_messages() {
        let config = config();

        assert!(!config.is_channel_watched(None, GIVEAWAY_CHANNEL));
        assert!(!config.is_channel_watched(Some(1), GIVEAWAY_CHANNEL));
    }

    #[test]
    fn all_channels_scope_includes_everything() {
        let scope = ChannelScope {
            all_channels: true,
            specific_channels: vec![],
        };

        assert!(scope.includes(12345));
    }

    #[test]
    fn deserializes_from_json() {
        let server: ServerConfig = serde_json::from_str(
            r#"{
                "guild_id": 1,
                "commands": [
                    { "command": "monthly_giveaway", "channels": { "specific_channels": [5] } },
                    { "command": "admin", "channels": { "all_channels": true } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(server.commands.len(), 2);
        assert_eq!(server.commands[0].command, CommandKind::MonthlyGiveaway);
        assert!(server.commands[1].channels.all_channels);
    }
}
