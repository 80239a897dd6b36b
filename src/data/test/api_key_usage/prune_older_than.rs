use super::*;
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests pruning old usage records.
///
/// Verifies that rows strictly older than the cutoff are deleted across all
/// keys while newer rows survive.
///
/// Expected: Ok(2) deleted with the recent row remaining
#[tokio::test]
async fn deletes_rows_older_than_cutoff() -> Result<(), DbErr> {
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
    repo.record(key.id, "/a", now - Duration::seconds(1800)).await?;
    repo.record(other.id, "/b", now - Duration::seconds(1000)).await?;
    repo.record(key.id, "/c", now - Duration::seconds(30)).await?;

    let deleted = repo.prune_older_than(now - Duration::seconds(900)).await?;

    assert_eq!(deleted, 2);
    let remaining = entity::prelude::ApiKeyUsage::find().count(db).await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests that rows exactly at the cutoff are kept.
///
/// Expected: Ok(0) deleted
#[tokio::test]
async fn keeps_rows_at_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rate_limit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = factory::api_key::create_api_key(db).await?;
    let cutoff = Utc::now() - Duration::seconds(900);

    let repo = ApiKeyUsageRepository::new(db);
    repo.record(key.id, "/a", cutoff).await?;

    let deleted = repo.prune_older_than(cutoff).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests pruning an empty log.
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

    let repo = ApiKeyUsageRepository::new(db);
    let deleted = repo.prune_older_than(Utc::now()).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
