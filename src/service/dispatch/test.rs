use std::{collections::HashSet, sync::Arc};

use sea_orm::{DatabaseConnection, EntityTrait};
use serenity::async_trait;
use test_utils::builder::TestBuilder;

use super::*;
use crate::{
    model::{
        command::{Author, CommandStatus},
        server_config::{ChannelScope, CommandConfig, ServerConfig},
    },
    service::random::ScriptedRandom,
};

const GUILD_ID: u64 = 100;
const GIVEAWAY_CHANNEL: u64 = 200;
const DICE_CHANNEL: u64 = 300;
const ADMIN_ID: u64 = 1;
const USER_ID: u64 = 42;

/// Replies with its name and the arguments it received.
struct EchoCommand {
    name: &'static str,
    status: CommandStatus,
}

#[async_trait]
impl Command for EchoCommand {
    async fn execute(&self, request: &CommandRequest) -> CommandResult {
        CommandResult::new(
            self.status,
            format!("{}: {}", self.name, request.argv[1..].join(" ")),
        )
    }
}

/// Always replies with nothing.
struct SilentCommand;

#[async_trait]
impl Command for SilentCommand {
    async fn execute(&self, _request: &CommandRequest) -> CommandResult {
        CommandResult::ok("")
    }
}

fn scope(channel_id: u64) -> ChannelScope {
    ChannelScope {
        all_channels: false,
        specific_channels: vec![channel_id],
    }
}

fn servers() -> Arc<ServerConfigMap> {
    Arc::new(ServerConfigMap::new(vec![ServerConfig {
        guild_id: GUILD_ID,
        commands: vec![
            CommandConfig {
                command: CommandKind::MonthlyGiveaway,
                channels: ChannelScope {
                    all_channels: false,
                    specific_channels: vec![GIVEAWAY_CHANNEL, DICE_CHANNEL],
                },
            },
            CommandConfig {
                command: CommandKind::Admin,
                channels: scope(GIVEAWAY_CHANNEL),
            },
            CommandConfig {
                command: CommandKind::Diceroll,
                channels: scope(DICE_CHANNEL),
            },
        ],
    }]))
}

fn dispatcher(db: &DatabaseConnection, env: BotEnv) -> Dispatcher {
    let easter_eggs = EasterEggs::new(Arc::new(ScriptedRandom::new([]))).unwrap();

    Dispatcher::new(
        db.clone(),
        env,
        servers(),
        HashSet::from([ADMIN_ID]),
        easter_eggs,
    )
    .register(
        CommandKind::MonthlyGiveaway,
        Arc::new(EchoCommand {
            name: "giveaway",
            status: CommandStatus::Ok,
        }),
    )
    .register(
        CommandKind::Diceroll,
        Arc::new(EchoCommand {
            name: "dice",
            status: CommandStatus::Ok,
        }),
    )
    .register(CommandKind::Admin, Arc::new(SilentCommand))
}

fn message(content: &str, channel_id: u64) -> InboundMessage {
    InboundMessage {
        message_id: 9_000,
        author: Author {
            id: USER_ID,
            name: "Participant".to_string(),
            mention: format!("<@{USER_ID}>"),
            role_names: Vec::new(),
        },
        guild_id: Some(GUILD_ID),
        channel_id,
        content: content.to_string(),
        timestamp_micros: 1_792_238_400_000_000,
    }
}

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

#[test]
fn parses_command_words() {
    assert_eq!(parse_command("!Giveaway now"), Some("giveaway".to_string()));
    assert_eq!(parse_command("!roll_2"), Some("roll_2".to_string()));
    assert_eq!(parse_command("!roll,please"), Some("roll".to_string()));
    assert_eq!(parse_command("giveaway"), None);
    assert_eq!(parse_command("! giveaway"), None);
    assert_eq!(parse_command("!giveaway\nsecond line"), None);
}

#[test]
fn resolves_aliases() {
    assert_eq!(resolve_alias("gimme"), Some(CommandKind::MonthlyGiveaway));
    assert_eq!(resolve_alias("gimmegimmegimme"), Some(CommandKind::MonthlyGiveaway));
    assert_eq!(resolve_alias("lotto"), Some(CommandKind::MonthlyLottery));
    assert_eq!(resolve_alias("diceroll"), Some(CommandKind::Diceroll));
    assert_eq!(resolve_alias("dice"), None);
}

#[test]
fn recognizes_env_flags() {
    assert_eq!(requested_env("--env=prod"), Some("prod"));
    assert_eq!(requested_env("--env="), None);
    assert_eq!(requested_env("--env=pr-od"), None);
    assert_eq!(requested_env("--force"), None);
}

#[tokio::test]
async fn executes_enabled_command_and_decorates_reply() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let reply = dispatcher(db, BotEnv::Dev)
        .dispatch(&message("!giveaway good luck", GIVEAWAY_CHANNEL))
        .await;

    assert_eq!(reply.as_deref(), Some("[dev]\ngiveaway: good luck"));
}

#[tokio::test]
async fn prod_replies_are_undecorated() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let reply = dispatcher(db, BotEnv::Prod)
        .dispatch(&message("!giveaway", GIVEAWAY_CHANNEL))
        .await;

    assert_eq!(reply.as_deref(), Some("giveaway: "));
}

#[tokio::test]
async fn ignores_non_commands() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db, BotEnv::Dev);

    assert_eq!(dispatcher.dispatch(&message("hello", GIVEAWAY_CHANNEL)).await, None);
    assert_eq!(
        dispatcher
            .dispatch(&message("!giveaway\nwith a newline", GIVEAWAY_CHANNEL))
            .await,
        None
    );
}

#[tokio::test]
async fn ignores_unwatched_channels_and_direct_messages() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db, BotEnv::Dev);
    let mut direct = message("!giveaway", GIVEAWAY_CHANNEL);
    direct.guild_id = None;

    assert_eq!(dispatcher.dispatch(&message("!giveaway", 999)).await, None);
    assert_eq!(dispatcher.dispatch(&message("!unknown", 999)).await, None);
    assert_eq!(dispatcher.dispatch(&direct).await, None);
}

#[tokio::test]
async fn rejects_unknown_commands_in_watched_channels() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let reply = dispatcher(db, BotEnv::Dev)
        .dispatch(&message("!Frobnicate", GIVEAWAY_CHANNEL))
        .await;

    assert_eq!(reply.as_deref(), Some("[dev]\nUnrecognized command: !frobnicate"));
}

#[tokio::test]
async fn rejects_commands_not_enabled_in_channel() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db, BotEnv::Dev);

    assert_eq!(
        dispatcher
            .dispatch(&message("!diceroll", GIVEAWAY_CHANNEL))
            .await
            .as_deref(),
        Some("[dev]\nYou cannot use !diceroll in this channel.")
    );
    assert_eq!(
        dispatcher
            .dispatch(&message("!lotto", GIVEAWAY_CHANNEL))
            .await
            .as_deref(),
        Some("[dev]\nYou cannot use !lotto in this channel.")
    );
}

#[tokio::test]
async fn roll_means_dice_where_dice_is_enabled() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db, BotEnv::Dev);

    assert_eq!(
        dispatcher
            .dispatch(&message("!roll 1-6", DICE_CHANNEL))
            .await
            .as_deref(),
        Some("[dev]\ndice: 1-6")
    );
    assert_eq!(
        dispatcher
            .dispatch(&message("!roll", GIVEAWAY_CHANNEL))
            .await
            .as_deref(),
        Some("[dev]\ngiveaway: ")
    );
    assert_eq!(
        dispatcher
            .dispatch(&message("!giveaway", DICE_CHANNEL))
            .await
            .as_deref(),
        Some("[dev]\ngiveaway: ")
    );
}

#[tokio::test]
async fn rejects_overlong_messages() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let content = format!("!giveaway {}", "a".repeat(250));
    let reply = dispatcher(db, BotEnv::Dev)
        .dispatch(&message(&content, GIVEAWAY_CHANNEL))
        .await;

    assert_eq!(
        reply.as_deref(),
        Some("[dev]\nMessage rejected: too long (max 255 chars)")
    );
}

#[tokio::test]
async fn env_flag_targets_one_environment() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db, BotEnv::Dev);

    assert_eq!(
        dispatcher
            .dispatch(&message("!giveaway --env=prod", GIVEAWAY_CHANNEL))
            .await,
        None
    );
    assert_eq!(
        dispatcher
            .dispatch(&message("!giveaway --env=dev hello", GIVEAWAY_CHANNEL))
            .await
            .as_deref(),
        Some("[dev]\ngiveaway: hello")
    );
}

#[tokio::test]
async fn unbalanced_quotes_are_invalid() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let reply = dispatcher(db, BotEnv::Dev)
        .dispatch(&message("!giveaway let's go", GIVEAWAY_CHANNEL))
        .await;

    assert_eq!(
        reply.as_deref(),
        Some("[dev]\nUnable to parse arguments: No closing quotation")
    );
}

#[tokio::test]
async fn easter_eggs_answer_anywhere() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let reply = dispatcher(db, BotEnv::Dev)
        .dispatch(&message("!sudo rm -rf /", 999))
        .await;

    assert_eq!(
        reply.as_deref(),
        Some("[dev]\n<@42> is not in the sudoers file. This incident will be reported.")
    );
}

#[tokio::test]
async fn logs_executed_commands() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let reply = dispatcher(db, BotEnv::Dev)
        .dispatch(&message("!admin list-instances", GIVEAWAY_CHANNEL))
        .await;
    assert_eq!(reply, None);

    let log = entity::prelude::CommandLog::find_by_id("9000".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(log.command, "!admin list-instances");
    assert_eq!(log.discord_user_id, USER_ID.to_string());
    assert_eq!(log.command_status, 0);

    let user = entity::prelude::DiscordUser::find_by_id(USER_ID.to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.name, "Participant");

    Ok(())
}

#[tokio::test]
async fn rejected_messages_are_not_logged() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    dispatcher(db, BotEnv::Dev)
        .dispatch(&message("!diceroll", GIVEAWAY_CHANNEL))
        .await;

    assert!(entity::prelude::CommandLog::find().one(db).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn command_log_failure_does_not_block_reply() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reply = dispatcher(db, BotEnv::Dev)
        .dispatch(&message("!giveaway", GIVEAWAY_CHANNEL))
        .await;

    assert_eq!(reply.as_deref(), Some("[dev]\ngiveaway: "));
}

#[tokio::test]
async fn is_admin_uses_configured_ids() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db, BotEnv::Dev);

    assert!(dispatcher.is_admin(ADMIN_ID));
    assert!(!dispatcher.is_admin(USER_ID));
}
