//! API key data repository for database operations.
//!
//! This module provides the `ApiKeyRepository` for managing API key records in the
//! database. It handles key creation, lookup by token, activation state changes, and
//! last-use tracking with conversion between entity models and domain models at the
//! infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::api_key::{ApiKey, CreateApiKeyParam};

/// Repository providing database operations for API key management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, and updating API key records.
pub struct ApiKeyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyRepository<'a> {
    /// Creates a new ApiKeyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ApiKeyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new API key with the given token and limits.
    ///
    /// The token is generated by the service layer; the repository only stores it.
    /// New keys are created active with `last_used_at` unset.
    ///
    /// # Arguments
    /// - `key` - The opaque key token to store
    /// - `param` - Key creation parameters including name and per-window ceilings
    ///
    /// # Returns
    /// - `Ok(ApiKey)` - The created key as a domain model
    /// - `Err(DbErr)` - Database error during insert (including token collisions)
    pub async fn create(&self, key: String, param: CreateApiKeyParam) -> Result<ApiKey, DbErr> {
        let entity = entity::api_key::ActiveModel {
            key: ActiveValue::Set(key),
            name: ActiveValue::Set(param.name),
            active: ActiveValue::Set(true),
            rate_limit_per_second: ActiveValue::Set(param.limits.per_second),
            rate_limit_per_minute: ActiveValue::Set(param.limits.per_minute),
            rate_limit_per_15_minutes: ActiveValue::Set(param.limits.per_15_minutes),
            created_at: ActiveValue::Set(Utc::now()),
            last_used_at: ActiveValue::Set(None),
            ..Default::default()
        };

        let entity = entity::prelude::ApiKey::insert(entity)
            .exec_with_returning(self.db)
            .await?;

        Ok(ApiKey::from_entity(entity))
    }

    /// Finds an API key by its token.
    ///
    /// Used by the authentication guard to resolve the `X-Api-Key` header value.
    ///
    /// # Arguments
    /// - `key` - The opaque key token presented by the client
    ///
    /// # Returns
    /// - `Ok(Some(ApiKey))` - Key found
    /// - `Ok(None)` - No key with that token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_key(&self, key: &str) -> Result<Option<ApiKey>, DbErr> {
        let entity = entity::prelude::ApiKey::find()
            .filter(entity::api_key::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.map(ApiKey::from_entity))
    }

    /// Finds an API key by its database ID.
    ///
    /// # Arguments
    /// - `id` - Database ID of the key
    ///
    /// # Returns
    /// - `Ok(Some(ApiKey))` - Key found
    /// - `Ok(None)` - No key with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ApiKey>, DbErr> {
        let entity = entity::prelude::ApiKey::find_by_id(id).one(self.db).await?;

        Ok(entity.map(ApiKey::from_entity))
    }

    /// Gets all API keys ordered by name.
    ///
    /// Used by the admin key listing endpoint.
    ///
    /// # Returns
    /// - `Ok(Vec<ApiKey>)` - All keys (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<ApiKey>, DbErr> {
        let entities = entity::prelude::ApiKey::find()
            .order_by_asc(entity::api_key::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ApiKey::from_entity).collect())
    }

    /// Sets the activation state for a key.
    ///
    /// Deactivated keys fail authentication but keep their usage history.
    ///
    /// # Arguments
    /// - `id` - Database ID of the key
    /// - `active` - Whether the key should be accepted for authentication
    ///
    /// # Returns
    /// - `Ok(())` - State updated (or no matching key found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, active: bool) -> Result<(), DbErr> {
        entity::prelude::ApiKey::update_many()
            .filter(entity::api_key::Column::Id.eq(id))
            .col_expr(
                entity::api_key::Column::Active,
                sea_orm::sea_query::Expr::value(active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Updates the last-use timestamp for a key.
    ///
    /// Called after a key successfully authenticates a request. Failures here are
    /// non-fatal to the request path; callers decide how to handle them.
    ///
    /// # Arguments
    /// - `id` - Database ID of the key
    /// - `used_at` - When the key authenticated
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching key found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch_last_used(&self, id: i32, used_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::ApiKey::update_many()
            .filter(entity::api_key::Column::Id.eq(id))
            .col_expr(
                entity::api_key::Column::LastUsedAt,
                sea_orm::sea_query::Expr::value(used_at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
