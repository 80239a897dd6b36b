//! API key domain models and parameters.
//!
//! Provides domain models for client API keys with their per-window rate limit
//! ceilings. Includes parameter types for key creation used by the admin
//! management endpoints.

use chrono::{DateTime, Utc};

use crate::model::api::ApiKeyDto;

/// Per-window request ceilings configured for an API key.
///
/// A ceiling of 0 means requests on that window are always denied. The limiter
/// only reads these values; they are owned by the key management subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiKeyLimits {
    /// Maximum requests in any 1 second window.
    pub per_second: i32,
    /// Maximum requests in any 60 second window.
    pub per_minute: i32,
    /// Maximum requests in any 900 second window.
    pub per_15_minutes: i32,
}

/// API key with identity, activation state, and rate limit configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiKey {
    /// Database ID of the key, used to scope usage counting.
    pub id: i32,
    /// The opaque token clients present in the `X-Api-Key` header.
    pub key: String,
    /// Human-readable label identifying the key's owner.
    pub name: String,
    /// Whether the key is currently accepted for authentication.
    pub active: bool,
    /// Per-window rate limit ceilings enforced for this key.
    pub limits: ApiKeyLimits,
    /// When the key was created.
    pub created_at: DateTime<Utc>,
    /// When the key last authenticated a request, if ever.
    pub last_used_at: Option<DateTime<Utc>>,
}

impl ApiKey {
    /// Converts an entity model to an API key domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `ApiKey` - The converted domain model
    pub fn from_entity(entity: entity::api_key::Model) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            name: entity.name,
            active: entity.active,
            limits: ApiKeyLimits {
                per_second: entity.rate_limit_per_second,
                per_minute: entity.rate_limit_per_minute,
                per_15_minutes: entity.rate_limit_per_15_minutes,
            },
            created_at: entity.created_at,
            last_used_at: entity.last_used_at,
        }
    }

    /// Converts the API key domain model to a DTO for API responses.
    ///
    /// The key token itself is included; the admin endpoints returning this DTO
    /// are the only place the token is ever echoed back.
    ///
    /// # Returns
    /// - `ApiKeyDto` - The converted DTO
    pub fn into_dto(self) -> ApiKeyDto {
        ApiKeyDto {
            id: self.id,
            key: self.key,
            name: self.name,
            active: self.active,
            rate_limit_per_second: self.limits.per_second,
            rate_limit_per_minute: self.limits.per_minute,
            rate_limit_per_15_minutes: self.limits.per_15_minutes,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new API key.
#[derive(Debug, Clone)]
pub struct CreateApiKeyParam {
    /// Human-readable label for the key's owner.
    pub name: String,
    /// Per-window rate limit ceilings for the new key.
    pub limits: ApiKeyLimits,
}
