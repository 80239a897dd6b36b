//! Rate limit evaluation service.
//!
//! Evaluates every request against the key's three nested windows, finest
//! first, deriving each window's usage count from the append-only usage log.
//! Allowed requests are recorded in the same pass; denied requests record
//! nothing, so a blocked client cannot extend its own lockout by retrying.
//! When the usage store is unavailable the limiter fails open rather than
//! taking the API down with it.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::api_key_usage::ApiKeyUsageRepository,
    model::{
        api_key::ApiKey,
        rate_limit::{RateLimitDecision, RateLimitWindow},
    },
};

pub struct RateLimitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RateLimitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks the key's windows and records the request if it is allowed.
    ///
    /// Windows are evaluated finest to coarsest; the first window whose usage
    /// has reached its ceiling denies the request with the escalated penalty.
    /// A store error degrades to a fail-open decision instead of an error so
    /// the request path stays available.
    ///
    /// # Arguments
    /// - `key` - The authenticated API key
    /// - `endpoint` - Request path, stored with the usage record
    /// - `now` - The instant the request arrived
    ///
    /// # Returns
    /// - `RateLimitDecision` - Allowed or denied, with per-window statuses
    pub async fn check_and_record(
        &self,
        key: &ApiKey,
        endpoint: &str,
        now: DateTime<Utc>,
    ) -> RateLimitDecision {
        match self.evaluate(key, endpoint, now).await {
            Ok(decision) => decision,
            Err(err) => {
                tracing::warn!(
                    "Rate limit check failed for API key {}, failing open: {}",
                    key.id,
                    err
                );
                RateLimitDecision::fail_open(&key.limits, now)
            }
        }
    }

    /// Runs the window checks against the usage log.
    ///
    /// # Arguments
    /// - `key` - The authenticated API key
    /// - `endpoint` - Request path, stored with the usage record
    /// - `now` - The instant the request arrived
    ///
    /// # Returns
    /// - `Ok(RateLimitDecision)` - The decision; allowed requests are recorded
    /// - `Err(DbErr)` - Database error while counting or recording
    async fn evaluate(
        &self,
        key: &ApiKey,
        endpoint: &str,
        now: DateTime<Utc>,
    ) -> Result<RateLimitDecision, DbErr> {
        let repo = ApiKeyUsageRepository::new(self.db);

        let mut usage = [
            (RateLimitWindow::Second, 0i64),
            (RateLimitWindow::Minute, 0i64),
            (RateLimitWindow::FifteenMinutes, 0i64),
        ];

        for (slot, window) in usage.iter_mut().zip(RateLimitWindow::ordered()) {
            let since = now - window.duration();
            let used = repo.count_since(key.id, since).await? as i64;

            // A ceiling of 0 denies every request on this window.
            if used >= window.ceiling(&key.limits) {
                return Ok(RateLimitDecision::denied(&key.limits, window, now));
            }

            *slot = (window, used);
        }

        repo.record(key.id, endpoint, now).await?;

        Ok(RateLimitDecision::allowed(&key.limits, &usage, now))
    }
}
