use super::*;

/// Tests deactivating an issued key.
///
/// Expected: Ok with active false on the returned key
#[tokio::test]
async fn deactivates_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::api_key::create_api_key(db).await?;

    let service = ApiKeyService::new(db);
    let key = service.deactivate(created.id).await.unwrap();

    assert_eq!(key.id, created.id);
    assert!(!key.active);

    Ok(())
}

/// Tests deactivating a key that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ApiKeyService::new(db);
    let result = service.deactivate(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
