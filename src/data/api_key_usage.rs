//! API key usage log repository.
//!
//! This module provides the `ApiKeyUsageRepository` over the append-only request log
//! the rate limiter derives its window counts from. The limiter itself only appends
//! and counts; deletion is reserved for the retention scheduler.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations on the API key usage log.
///
/// This struct holds a reference to the database connection and provides methods
/// for appending usage records, counting usage within a window, and pruning old rows.
pub struct ApiKeyUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyUsageRepository<'a> {
    /// Creates a new ApiKeyUsageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ApiKeyUsageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one usage record for a key.
    ///
    /// Called exactly once per allowed request; denied requests record nothing.
    ///
    /// # Arguments
    /// - `api_key_id` - Database ID of the key the request authenticated with
    /// - `endpoint` - Request path the key was used against
    /// - `timestamp` - When the request was made
    ///
    /// # Returns
    /// - `Ok(())` - Record appended
    /// - `Err(DbErr)` - Database error during insert
    pub async fn record(
        &self,
        api_key_id: i32,
        endpoint: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::api_key_usage::ActiveModel {
            api_key_id: ActiveValue::Set(api_key_id),
            endpoint: ActiveValue::Set(endpoint.to_string()),
            timestamp: ActiveValue::Set(timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Counts usage records for a key at or after the given instant.
    ///
    /// The rate limiter calls this once per window with
    /// `since = now - window duration` to derive the window's usage count.
    ///
    /// # Arguments
    /// - `api_key_id` - Database ID of the key
    /// - `since` - Start of the window (inclusive)
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records in the window
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_since(
        &self,
        api_key_id: i32,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::ApiKeyUsage::find()
            .filter(entity::api_key_usage::Column::ApiKeyId.eq(api_key_id))
            .filter(entity::api_key_usage::Column::Timestamp.gte(since))
            .count(self.db)
            .await
    }

    /// Deletes usage records older than the given cutoff, across all keys.
    ///
    /// Used by the retention scheduler; rows older than the coarsest rate limit
    /// window can never affect another decision.
    ///
    /// # Arguments
    /// - `cutoff` - Records strictly older than this instant are deleted
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::ApiKeyUsage::delete_many()
            .filter(entity::api_key_usage::Column::Timestamp.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
