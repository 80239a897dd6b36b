use super::*;

/// Tests creating a new API key.
///
/// Verifies that the repository successfully inserts a key with the provided
/// token, name, and per-window ceilings, active by default and never used.
///
/// Expected: Ok with all fields stored as given
#[tokio::test]
async fn creates_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiKeyRepository::new(db);
    let result = repo
        .create(
            "token-abc".to_string(),
            CreateApiKeyParam {
                name: "Forum agent".to_string(),
                limits: ApiKeyLimits {
                    per_second: 2,
                    per_minute: 100,
                    per_15_minutes: 1000,
                },
            },
        )
        .await;

    assert!(result.is_ok());
    let key = result.unwrap();
    assert_eq!(key.key, "token-abc");
    assert_eq!(key.name, "Forum agent");
    assert!(key.active);
    assert_eq!(key.limits.per_second, 2);
    assert_eq!(key.limits.per_minute, 100);
    assert_eq!(key.limits.per_15_minutes, 1000);
    assert!(key.last_used_at.is_none());

    Ok(())
}

/// Tests that the key token must be unique.
///
/// Verifies that inserting a second key with the same token fails with a
/// database error instead of silently overwriting the first.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiKeyRepository::new(db);
    let param = CreateApiKeyParam {
        name: "First".to_string(),
        limits: ApiKeyLimits {
            per_second: 10,
            per_minute: 100,
            per_15_minutes: 1000,
        },
    };

    repo.create("same-token".to_string(), param.clone()).await?;
    let result = repo.create("same-token".to_string(), param).await;

    assert!(result.is_err());

    Ok(())
}
