use super::*;
use chrono::{TimeZone, Utc};

/// Tests recording when a key last authenticated.
///
/// Expected: Ok with last_used_at set to the provided instant
#[tokio::test]
async fn sets_last_used_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::api_key::create_api_key(db).await?;
    let used_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let repo = ApiKeyRepository::new(db);
    repo.touch_last_used(created.id, used_at).await?;

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.last_used_at, Some(used_at));

    Ok(())
}

/// Tests that a later use overwrites the previous timestamp.
///
/// Expected: Ok with last_used_at reflecting the most recent call
#[tokio::test]
async fn overwrites_previous_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::api_key::create_api_key(db).await?;
    let first = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2026, 3, 1, 13, 0, 0).unwrap();

    let repo = ApiKeyRepository::new(db);
    repo.touch_last_used(created.id, first).await?;
    repo.touch_last_used(created.id, second).await?;

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.last_used_at, Some(second));

    Ok(())
}
