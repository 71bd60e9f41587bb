use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participation::Table)
                    .if_not_exists()
                    .col(string(Participation::Activity))
                    .col(string(Participation::DiscordUserId))
                    .col(big_integer(Participation::LastParticipationMicros))
                    // One record per user per activity, overwritten on each participation
                    .primary_key(
                        Index::create()
                            .col(Participation::Activity)
                            .col(Participation::DiscordUserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participation {
    Table,
    Activity,
    DiscordUserId,
    LastParticipationMicros,
}
