use super::*;

/// Tests listing all keys ordered by name.
///
/// Expected: Ok with keys sorted alphabetically
#[tokio::test]
async fn returns_all_keys_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::api_key::ApiKeyFactory::new(db)
        .name("Zeta bot")
        .build()
        .await?;
    factory::api_key::ApiKeyFactory::new(db)
        .name("Alpha bot")
        .build()
        .await?;

    let repo = ApiKeyRepository::new(db);
    let keys = repo.get_all().await?;

    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].name, "Alpha bot");
    assert_eq!(keys[1].name, "Zeta bot");

    Ok(())
}

/// Tests listing when no keys exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiKeyRepository::new(db);
    let keys = repo.get_all().await?;

    assert!(keys.is_empty());

    Ok(())
}
