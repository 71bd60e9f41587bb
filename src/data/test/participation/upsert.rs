use super::*;

/// Tests creating the first record for a key.
///
/// Expected: Ok with the record readable afterwards
#[tokio::test]
async fn creates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Participation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipationRepository::new(db);
    let key = ParticipationKey::new("monthly_giveaway", 7);
    let record = repo
        .upsert(UpsertParticipationParam {
            key: key.clone(),
            last_participation_micros: 5_000,
        })
        .await?;

    assert_eq!(record.last_participation_micros, 5_000);
    assert_eq!(repo.get(&key).await?, Some(record));

    Ok(())
}

/// Tests overwriting an existing record.
///
/// Expected: Ok with a single row holding the newest timestamp
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Participation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_participation(db, "monthly_giveaway", 7, 1_000).await?;

    let repo = ParticipationRepository::new(db);
    let key = ParticipationKey::new("monthly_giveaway", 7);
    repo.upsert(UpsertParticipationParam {
        key: key.clone(),
        last_participation_micros: 9_000,
    })
    .await?;

    let record = repo.get(&key).await?.unwrap();
    assert_eq!(record.last_participation_micros, 9_000);

    use sea_orm::{EntityTrait, PaginatorTrait};
    let rows = entity::prelude::Participation::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}
