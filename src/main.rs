mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

use crate::{
    bot::start::{init_bot, start_bot},
    config::{BotConfig, Config},
    error::AppError,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("advice_bot=info,info")),
        )
        .init();

    let config = Config::from_env()?;
    let bot_config = BotConfig::load(&config.bot_config_path)?;

    tracing::info!(
        "Loaded configuration for {} server(s) in {} env",
        bot_config.servers.len(),
        config.env
    );

    let db = startup::connect_to_database(&config).await?;
    let shutdown = Arc::new(Notify::new());
    let dispatcher = startup::build_dispatcher(db, &config, bot_config, shutdown.clone())?;

    let client = init_bot(&config, dispatcher).await?;
    start_bot(client, shutdown).await
}
