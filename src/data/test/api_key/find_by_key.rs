use super::*;

/// Tests finding a key by its token.
///
/// Verifies that the repository resolves a stored token to the full key record
/// including its rate limit ceilings.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::api_key::ApiKeyFactory::new(db)
        .key("lookup-token")
        .limits(5, 50, 500)
        .build()
        .await?;

    let repo = ApiKeyRepository::new(db);
    let found = repo.find_by_key("lookup-token").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.limits.per_second, 5);
    assert_eq!(found.limits.per_minute, 50);
    assert_eq!(found.limits.per_15_minutes, 500);

    Ok(())
}

/// Tests lookup with an unknown token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiKeyRepository::new(db);
    let found = repo.find_by_key("no-such-token").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that lookup matches the exact token.
///
/// Verifies that a different key's token does not match, even with a common
/// prefix.
///
/// Expected: Ok(None) for the prefix
#[tokio::test]
async fn does_not_match_token_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::api_key::ApiKeyFactory::new(db)
        .key("prefix-token-full")
        .build()
        .await?;

    let repo = ApiKeyRepository::new(db);
    let found = repo.find_by_key("prefix-token").await?;

    assert!(found.is_none());

    Ok(())
}
