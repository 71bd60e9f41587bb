use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use tokio::sync::Notify;

use crate::{bot::handler::Handler, config::Config, error::AppError, service::dispatch::Dispatcher};

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `dispatcher` - Message router shared by all event handler invocations
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(config: &Config, dispatcher: Dispatcher) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(Arc::new(dispatcher));

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the bot until the gateway closes or `shutdown` is notified.
///
/// # Arguments
/// - `client` - Client returned by `init_bot`
/// - `shutdown` - Notified by the admin `kill` command
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connecting to or running on the gateway failed
pub async fn start_bot(mut client: Client, shutdown: Arc<Notify>) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        shutdown.notified().await;

        tracing::info!("Shutdown requested, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}
