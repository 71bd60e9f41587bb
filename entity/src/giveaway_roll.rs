use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "giveaway_roll")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub activity: String,
    pub discord_user_id: String,
    pub timestamp_micros: i64,
    pub sequence_index: i32,
    pub prize: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
