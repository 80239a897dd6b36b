use super::*;
use crate::error::auth::AuthError;
use test_utils::factory::api_key::ApiKeyFactory;

/// Tests authenticating with a valid token.
///
/// Expected: Ok with the key the token belongs to
#[tokio::test]
async fn resolves_active_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ApiKeyFactory::new(db).key("known-token").build().await?;

    let service = ApiKeyService::new(db);
    let key = service.authenticate("known-token").await.unwrap();

    assert_eq!(key.id, created.id);

    Ok(())
}

/// Tests authenticating with a token no key owns.
///
/// Expected: Err(AuthError::UnknownApiKey)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ApiKeyService::new(db);
    let result = service.authenticate("no-such-token").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownApiKey))
    ));

    Ok(())
}

/// Tests authenticating with a deactivated key's token.
///
/// Expected: Err(AuthError::InactiveApiKey)
#[tokio::test]
async fn rejects_inactive_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ApiKeyFactory::new(db)
        .key("revoked-token")
        .active(false)
        .build()
        .await?;

    let service = ApiKeyService::new(db);
    let result = service.authenticate("revoked-token").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveApiKey(id))) if id == created.id
    ));

    Ok(())
}
