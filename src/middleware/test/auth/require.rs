use super::*;
use test_utils::factory::api_key::ApiKeyFactory;

/// Tests the API key guard with a valid key header.
///
/// Expected: Ok(ApiKey) matching the created key
#[tokio::test]
async fn accepts_valid_api_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ApiKeyFactory::new(db).key("valid-token").build().await?;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_static("valid-token"));

    let guard = ApiKeyGuard::new(db);
    let key = guard.require(&headers).await.unwrap();

    assert_eq!(key.id, created.id);

    Ok(())
}

/// Tests the API key guard with no key header.
///
/// Expected: Err(AuthError::MissingApiKey)
#[tokio::test]
async fn rejects_missing_api_key_header() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = ApiKeyGuard::new(db);
    let result = guard.require(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingApiKey))
    ));

    Ok(())
}

/// Tests the API key guard with a token no key owns.
///
/// Expected: Err(AuthError::UnknownApiKey)
#[tokio::test]
async fn rejects_unknown_api_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::api_key::create_api_key(db).await?;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_static("wrong-token"));

    let guard = ApiKeyGuard::new(db);
    let result = guard.require(&headers).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownApiKey))
    ));

    Ok(())
}

/// Tests the API key guard with a deactivated key's token.
///
/// Expected: Err(AuthError::InactiveApiKey)
#[tokio::test]
async fn rejects_inactive_api_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ApiKeyFactory::new(db)
        .key("revoked-token")
        .active(false)
        .build()
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_static("revoked-token"));

    let guard = ApiKeyGuard::new(db);
    let result = guard.require(&headers).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveApiKey(_)))
    ));

    Ok(())
}

/// Tests the admin guard with the configured token.
///
/// Expected: Ok(())
#[test]
fn admin_guard_accepts_configured_token() {
    let mut headers = HeaderMap::new();
    headers.insert("x-admin-token", HeaderValue::from_static("secret"));

    let guard = AdminGuard::new("secret");

    assert!(guard.require(&headers).is_ok());
}

/// Tests the admin guard with no token header.
///
/// Expected: Err(AuthError::MissingAdminToken)
#[test]
fn admin_guard_rejects_missing_token() {
    let guard = AdminGuard::new("secret");

    let result = guard.require(&HeaderMap::new());

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingAdminToken))
    ));
}

/// Tests the admin guard with a wrong token.
///
/// Expected: Err(AuthError::InvalidAdminToken)
#[test]
fn admin_guard_rejects_wrong_token() {
    let mut headers = HeaderMap::new();
    headers.insert("x-admin-token", HeaderValue::from_static("guess"));

    let guard = AdminGuard::new("secret");

    let result = guard.require(&headers);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidAdminToken))
    ));
}
