use super::*;

/// Tests reading a key that has never been recorded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Participation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipationRepository::new(db);
    let result = repo
        .get(&ParticipationKey::new("monthly_giveaway", 42))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests reading an existing record.
///
/// Expected: Ok(Some) with the stored timestamp
#[tokio::test]
async fn returns_stored_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Participation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_participation(db, "monthly_giveaway", 42, 1_700_000_000_000_000).await?;

    let repo = ParticipationRepository::new(db);
    let key = ParticipationKey::new("monthly_giveaway", 42);
    let record = repo.get(&key).await?.unwrap();

    assert_eq!(record.key, key);
    assert_eq!(record.last_participation_micros, 1_700_000_000_000_000);

    Ok(())
}

/// Tests that records are scoped per activity.
///
/// A giveaway participation must not make the same user ineligible for the lottery.
///
/// Expected: Ok(None) for the other activity
#[tokio::test]
async fn records_are_scoped_to_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Participation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_participation(db, "monthly_giveaway", 42, 1_000).await?;

    let repo = ParticipationRepository::new(db);
    let result = repo
        .get(&ParticipationKey::new("monthly_lottery", 42))
        .await?;

    assert!(result.is_none());

    Ok(())
}
