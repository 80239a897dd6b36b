use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AdminGuard,
    model::{
        api::{ApiKeyDto, CreateApiKeyDto},
        api_key::{ApiKeyLimits, CreateApiKeyParam},
    },
    service::api_key::ApiKeyService,
    state::AppState,
};

/// Create a new API key.
///
/// Issues a key with the requested name and per-window rate limit ceilings.
/// The generated token is returned once in the response body.
///
/// # Access Control
/// - Admin token - Configured bootstrap token in `X-Admin-Token`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the admin token
/// - `payload` - Key name and per-window ceilings
///
/// # Returns
/// - `201 Created` - The created key including its token
/// - `401 Unauthorized` / `403 Forbidden` - Missing or invalid admin token
/// - `500 Internal Server Error` - Database error
pub async fn create_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateApiKeyDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_token).require(&headers)?;

    let service = ApiKeyService::new(&state.db);
    let key = service
        .create(CreateApiKeyParam {
            name: payload.name,
            limits: ApiKeyLimits {
                per_second: payload.rate_limit_per_second,
                per_minute: payload.rate_limit_per_minute,
                per_15_minutes: payload.rate_limit_per_15_minutes,
            },
        })
        .await?;

    Ok((StatusCode::CREATED, Json(key.into_dto())))
}

/// List all API keys.
///
/// # Access Control
/// - Admin token - Configured bootstrap token in `X-Admin-Token`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the admin token
///
/// # Returns
/// - `200 OK` - All keys ordered by name
/// - `401 Unauthorized` / `403 Forbidden` - Missing or invalid admin token
/// - `500 Internal Server Error` - Database error
pub async fn get_api_keys(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_token).require(&headers)?;

    let service = ApiKeyService::new(&state.db);
    let keys = service.get_all().await?;

    let dtos: Vec<ApiKeyDto> = keys.into_iter().map(|key| key.into_dto()).collect();

    Ok(Json(dtos))
}

/// Deactivate an API key.
///
/// Deactivated keys fail authentication immediately; their usage history is
/// kept until the retention job prunes it.
///
/// # Access Control
/// - Admin token - Configured bootstrap token in `X-Admin-Token`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the admin token
/// - `id` - Database ID of the key to deactivate
///
/// # Returns
/// - `200 OK` - The key after deactivation
/// - `401 Unauthorized` / `403 Forbidden` - Missing or invalid admin token
/// - `404 Not Found` - No key with that ID
/// - `500 Internal Server Error` - Database error
pub async fn deactivate_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_token).require(&headers)?;

    let service = ApiKeyService::new(&state.db);
    let key = service.deactivate(id).await?;

    Ok(Json(key.into_dto()))
}
