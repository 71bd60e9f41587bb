use crate::{
    data::participation::ParticipationRepository,
    model::participation::{ParticipationKey, UpsertParticipationParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod upsert;
