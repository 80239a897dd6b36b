use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No API key header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing the API key header")]
    MissingApiKey,

    /// The presented API key does not match any known key.
    ///
    /// Results in a 401 Unauthorized response. The key value is deliberately
    /// not echoed back or logged.
    #[error("Unknown API key")]
    UnknownApiKey,

    /// The presented API key exists but has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Database ID of the deactivated key, for server-side diagnostics
    #[error("API key {0} is deactivated")]
    InactiveApiKey(i32),

    /// No admin token header was present on an admin request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing the admin token header")]
    MissingAdminToken,

    /// The presented admin token does not match the configured token.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid admin token")]
    InvalidAdminToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes with deliberately
/// generic client-facing messages:
/// - `MissingApiKey` / `UnknownApiKey` / `MissingAdminToken` → 401 Unauthorized
/// - `InactiveApiKey` / `InvalidAdminToken` → 403 Forbidden
///
/// # Returns
/// - 401 Unauthorized - For missing or unrecognized credentials
/// - 403 Forbidden - For valid-but-rejected credentials
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingApiKey | Self::UnknownApiKey => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "A valid API key is required.".to_string(),
                }),
            )
                .into_response(),
            Self::InactiveApiKey(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "This API key has been deactivated.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingAdminToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "An admin token is required.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidAdminToken => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Invalid admin token.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
