use std::{collections::HashSet, sync::Arc};

use sea_orm::DatabaseConnection;
use tokio::sync::Notify;

use crate::{
    config::{BotConfig, Config},
    error::AppError,
    model::{command::CommandKind, server_config::ServerConfigMap},
    service::{
        command::{
            admin::AdminCommand, dice_roll::DiceRollCommand, help::HelpCommand,
            monthly_draw::MonthlyDrawCommand,
        },
        dispatch::Dispatcher,
        draw::DrawDefinition,
        easter_egg::EasterEggs,
        instance::InstanceInfo,
        participation::ParticipationService,
        random::{OsRandomSource, RandomSource},
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the dispatcher with every command registered.
///
/// Draw tables are validated here, so a malformed configuration stops startup before the
/// bot connects to Discord. Both monthly draws share one participation service and with it
/// one cache and one set of per-user locks.
///
/// # Arguments
/// - `db` - Migrated database connection
/// - `config` - Process configuration
/// - `bot_config` - Parsed bot configuration file
/// - `shutdown` - Notified when an administrator stops this instance
///
/// # Returns
/// - `Ok(Dispatcher)` - Ready to route messages
/// - `Err(AppError::ConfigErr)` - A draw table or definition is invalid
pub fn build_dispatcher(
    db: DatabaseConnection,
    config: &Config,
    bot_config: BotConfig,
    shutdown: Arc<Notify>,
) -> Result<Dispatcher, AppError> {
    let rng: Arc<dyn RandomSource> = Arc::new(OsRandomSource);
    let servers = Arc::new(ServerConfigMap::new(bot_config.servers));
    let admins: HashSet<u64> = bot_config.admin_user_ids.into_iter().collect();

    let giveaway = Arc::new(DrawDefinition::from_spec(bot_config.draws.giveaway)?);
    let lottery = Arc::new(DrawDefinition::from_spec(bot_config.draws.lottery)?);
    let participation = ParticipationService::new(db.clone());

    let instance = InstanceInfo::current(config.env);
    tracing::info!("Instance {} starting", instance.id);

    let dispatcher = Dispatcher::new(
        db,
        config.env,
        servers.clone(),
        admins,
        EasterEggs::new(rng.clone())?,
    )
    .register(
        CommandKind::Admin,
        Arc::new(AdminCommand::new(instance, shutdown)),
    )
    .register(CommandKind::Help, Arc::new(HelpCommand::new(servers)))
    .register(
        CommandKind::MonthlyGiveaway,
        Arc::new(MonthlyDrawCommand::new(
            giveaway,
            participation.clone(),
            rng.clone(),
            config.env,
        )),
    )
    .register(
        CommandKind::MonthlyLottery,
        Arc::new(MonthlyDrawCommand::new(
            lottery,
            participation,
            rng.clone(),
            config.env,
        )),
    )
    .register(CommandKind::Diceroll, Arc::new(DiceRollCommand::new(rng)));

    Ok(dispatcher)
}
