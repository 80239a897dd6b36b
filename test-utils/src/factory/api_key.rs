//! API key factory for creating test API key entities.
//!
//! This module provides factory methods for creating API key entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test API keys with customizable fields.
///
/// Provides a builder pattern for creating API key entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::api_key::ApiKeyFactory;
///
/// let key = ApiKeyFactory::new(&db)
///     .name("CustomKey")
///     .limits(2, 100, 1000)
///     .active(true)
///     .build()
///     .await?;
/// ```
pub struct ApiKeyFactory<'a> {
    db: &'a DatabaseConnection,
    key: String,
    name: String,
    active: bool,
    rate_limit_per_second: i32,
    rate_limit_per_minute: i32,
    rate_limit_per_15_minutes: i32,
}

impl<'a> ApiKeyFactory<'a> {
    /// Creates a new ApiKeyFactory with default values.
    ///
    /// Defaults:
    /// - key: `"test-key-{id}"` where id is auto-incremented
    /// - name: `"Key {id}"`
    /// - active: `true`
    /// - limits: 10 per second, 100 per minute, 1000 per 15 minutes
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ApiKeyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            key: format!("test-key-{}", id),
            name: format!("Key {}", id),
            active: true,
            rate_limit_per_second: 10,
            rate_limit_per_minute: 100,
            rate_limit_per_15_minutes: 1000,
        }
    }

    /// Sets the key token.
    ///
    /// # Arguments
    /// - `key` - The opaque key token clients present for authentication
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the display name for the key.
    ///
    /// # Arguments
    /// - `name` - Human-readable label for the key's owner
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the key is active.
    ///
    /// # Arguments
    /// - `active` - Whether the key should be accepted for authentication
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets all three per-window rate limit ceilings.
    ///
    /// # Arguments
    /// - `per_second` - Maximum requests in any 1 second window
    /// - `per_minute` - Maximum requests in any 60 second window
    /// - `per_15_minutes` - Maximum requests in any 900 second window
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn limits(mut self, per_second: i32, per_minute: i32, per_15_minutes: i32) -> Self {
        self.rate_limit_per_second = per_second;
        self.rate_limit_per_minute = per_minute;
        self.rate_limit_per_15_minutes = per_15_minutes;
        self
    }

    /// Builds and inserts the API key entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::api_key::Model)` - Created API key entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::api_key::Model, DbErr> {
        entity::api_key::ActiveModel {
            key: ActiveValue::Set(self.key),
            name: ActiveValue::Set(self.name),
            active: ActiveValue::Set(self.active),
            rate_limit_per_second: ActiveValue::Set(self.rate_limit_per_second),
            rate_limit_per_minute: ActiveValue::Set(self.rate_limit_per_minute),
            rate_limit_per_15_minutes: ActiveValue::Set(self.rate_limit_per_15_minutes),
            created_at: ActiveValue::Set(Utc::now()),
            last_used_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an API key with default values.
///
/// Shorthand for `ApiKeyFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::api_key::Model)` - Created API key entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let key = create_api_key(&db).await?;
/// ```
pub async fn create_api_key(db: &DatabaseConnection) -> Result<entity::api_key::Model, DbErr> {
    ApiKeyFactory::new(db).build().await
}
