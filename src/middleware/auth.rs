//! Authentication guards for API and admin requests.
//!
//! Two guards cover the two credential types the API accepts: `ApiKeyGuard`
//! resolves client API keys from the `X-Api-Key` header against the database,
//! and `AdminGuard` compares the `X-Admin-Token` header against the bootstrap
//! token from configuration. Guards return domain errors; response mapping
//! lives with the error types.

use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::{
    error::{auth::AuthError, AppError},
    model::api_key::ApiKey,
    service::api_key::ApiKeyService,
};

/// Header clients present their API key in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header operators present the admin token in.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

pub struct ApiKeyGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires a valid, active API key on the request.
    ///
    /// # Arguments
    /// - `headers` - The request headers
    ///
    /// # Returns
    /// - `Ok(ApiKey)` - The key the request authenticated with
    /// - `Err(AppError::AuthErr)` - Header missing, token unknown, or key deactivated
    /// - `Err(AppError)` - Database error during lookup
    pub async fn require(&self, headers: &HeaderMap) -> Result<ApiKey, AppError> {
        let token = headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingApiKey)?;

        ApiKeyService::new(self.db).authenticate(token).await
    }
}

/// Guard for the admin key management endpoints.
///
/// The admin token is a single bootstrap credential from configuration, not a
/// database-backed key; it exists so the operator can issue the first API keys.
pub struct AdminGuard<'a> {
    admin_token: &'a str,
}

impl<'a> AdminGuard<'a> {
    pub fn new(admin_token: &'a str) -> Self {
        Self { admin_token }
    }

    /// Requires the configured admin token on the request.
    ///
    /// # Arguments
    /// - `headers` - The request headers
    ///
    /// # Returns
    /// - `Ok(())` - Token present and matching
    /// - `Err(AppError::AuthErr)` - Header missing or token mismatch
    pub fn require(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let token = headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingAdminToken)?;

        if token != self.admin_token {
            return Err(AuthError::InvalidAdminToken.into());
        }

        Ok(())
    }
}
