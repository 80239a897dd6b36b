//! API key management and authentication service.
//!
//! Provides key issuance for the admin endpoints and token authentication for
//! the request guard. Tokens are opaque 32-character alphanumeric strings
//! generated with the system's random number generator; the service never
//! derives them from the key's name or ID.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::api_key::ApiKeyRepository,
    error::{auth::AuthError, AppError},
    model::api_key::{ApiKey, CreateApiKeyParam},
};

pub struct ApiKeyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a new API key with a freshly generated token.
    ///
    /// # Arguments
    /// - `param` - Name and per-window rate limit ceilings for the new key
    ///
    /// # Returns
    /// - `Ok(ApiKey)` - The created key, including its token
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateApiKeyParam) -> Result<ApiKey, AppError> {
        let token = Self::generate_key_token();
        let repo = ApiKeyRepository::new(self.db);

        let key = repo.create(token, param).await?;

        Ok(key)
    }

    /// Gets all API keys ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<ApiKey>)` - All keys (empty if none exist)
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<ApiKey>, AppError> {
        let repo = ApiKeyRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deactivates a key so it no longer authenticates requests.
    ///
    /// The key's usage history is kept; deactivation is reversible through the
    /// database but not exposed over the API.
    ///
    /// # Arguments
    /// - `id` - Database ID of the key
    ///
    /// # Returns
    /// - `Ok(ApiKey)` - The key after deactivation
    /// - `Err(AppError::NotFound)` - No key with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn deactivate(&self, id: i32) -> Result<ApiKey, AppError> {
        let repo = ApiKeyRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("API key {id} not found")))?;

        repo.set_active(id, false).await?;

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("API key {id} not found")))
    }

    /// Resolves a presented token to an active API key.
    ///
    /// # Arguments
    /// - `token` - The value of the `X-Api-Key` header
    ///
    /// # Returns
    /// - `Ok(ApiKey)` - The key the token belongs to
    /// - `Err(AppError::AuthErr)` - Token unknown or key deactivated
    /// - `Err(AppError)` - Database error during lookup
    pub async fn authenticate(&self, token: &str) -> Result<ApiKey, AppError> {
        let repo = ApiKeyRepository::new(self.db);

        let key = repo
            .find_by_key(token)
            .await?
            .ok_or(AuthError::UnknownApiKey)?;

        if !key.active {
            return Err(AuthError::InactiveApiKey(key.id).into());
        }

        Ok(key)
    }

    /// Generates a random key token.
    ///
    /// Creates a 32-character string using uppercase letters, lowercase letters,
    /// and digits (0-9). Uses the system's random number generator for security.
    ///
    /// # Returns
    /// - `String` - A 32-character random alphanumeric string
    fn generate_key_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const TOKEN_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}
