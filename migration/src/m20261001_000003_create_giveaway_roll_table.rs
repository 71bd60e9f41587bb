use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GiveawayRoll::Table)
                    .if_not_exists()
                    .col(pk_auto(GiveawayRoll::Id))
                    .col(string(GiveawayRoll::Activity))
                    .col(string(GiveawayRoll::DiscordUserId))
                    .col(big_integer(GiveawayRoll::TimestampMicros))
                    .col(integer(GiveawayRoll::SequenceIndex))
                    .col(string(GiveawayRoll::Prize))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_giveaway_roll_unique")
                            .col(GiveawayRoll::Activity)
                            .col(GiveawayRoll::DiscordUserId)
                            .col(GiveawayRoll::TimestampMicros)
                            .col(GiveawayRoll::SequenceIndex),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiveawayRoll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GiveawayRoll {
    Table,
    Id,
    Activity,
    DiscordUserId,
    TimestampMicros,
    SequenceIndex,
    Prize,
}
