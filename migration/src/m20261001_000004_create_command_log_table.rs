use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommandLog::Table)
                    .if_not_exists()
                    .col(string(CommandLog::MessageId))
                    .col(big_integer(CommandLog::TimestampMicros))
                    .col(string(CommandLog::DiscordUserId))
                    .col(text(CommandLog::Command))
                    .col(integer(CommandLog::CommandStatus))
                    .primary_key(Index::create().col(CommandLog::MessageId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommandLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommandLog {
    Table,
    MessageId,
    TimestampMicros,
    DiscordUserId,
    Command,
    CommandStatus,
}
