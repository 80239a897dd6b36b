use super::*;
use chrono::{Duration, Utc};

/// Tests counting records within a window.
///
/// Verifies that only records at or after the window start are counted.
///
/// Expected: Ok(2) for the two in-window records
#[tokio::test]
async fn counts_only_records_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rate_limit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = factory::api_key::create_api_key(db).await?;
    let now = Utc::now();

    let repo = ApiKeyUsageRepository::new(db);
    repo.record(key.id, "/a", now - Duration::seconds(120)).await?;
    repo.record(key.id, "/b", now - Duration::seconds(30)).await?;
    repo.record(key.id, "/c", now).await?;

    let count = repo.count_since(key.id, now - Duration::seconds(60)).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests that the window start is inclusive.
///
/// Verifies that a record exactly at the window boundary is counted.
///
/// Expected: Ok(1)
#[tokio::test]
async fn window_start_is_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rate_limit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = factory::api_key::create_api_key(db).await?;
    let now = Utc::now();
    let boundary = now - Duration::seconds(60);

    let repo = ApiKeyUsageRepository::new(db);
    repo.record(key.id, "/a", boundary).await?;

    let count = repo.count_since(key.id, boundary).await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that counts are scoped to one key.
///
/// Verifies that another key's usage does not leak into the count.
///
/// Expected: Ok(1) for the queried key
#[tokio::test]
async fn scopes_count_to_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rate_limit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = factory::api_key::create_api_key(db).await?;
    let other = factory::api_key::create_api_key(db).await?;
    let now = Utc::now();

    let repo = ApiKeyUsageRepository::new(db);
    repo.record(key.id, "/a", now).await?;
    repo.record(other.id, "/a", now).await?;
    repo.record(other.id, "/b", now).await?;

    let count = repo.count_since(key.id, now - Duration::seconds(60)).await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests counting with an empty log.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rate_limit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = factory::api_key::create_api_key(db).await?;

    let repo = ApiKeyUsageRepository::new(db);
    let count = repo
        .count_since(key.id, Utc::now() - Duration::seconds(900))
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
