//! Rate limiting middleware for API routes.
//!
//! Authenticates the request's API key, evaluates it against the key's rate
//! limit windows, and either forwards the request or responds 429. Both
//! outcomes carry the full set of rate limit headers: per-window
//! `X-RateLimit-{Limit,Remaining,Reset}-{Second,Minute,15min}` triples plus
//! the legacy unsuffixed `X-RateLimit-*` headers, and `Retry-After` on denial.

use axum::{
    extract::{Request, State},
    http::{header::RETRY_AFTER, HeaderMap, HeaderName, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{
    data::api_key::ApiKeyRepository,
    error::AppError,
    middleware::auth::ApiKeyGuard,
    model::{
        api::ErrorDto,
        rate_limit::{RateLimitDecision, RateLimitWindow, WindowStatus},
    },
    service::rate_limit::RateLimitService,
    state::AppState,
};

/// Authenticates and rate limits one request.
///
/// On success the authenticated `ApiKey` is attached to the request extensions
/// for downstream handlers and the key's last-use timestamp is refreshed. A
/// failed last-use update is logged but never fails the request.
///
/// # Arguments
/// - `state` - Shared application state
/// - `request` - The incoming request
/// - `next` - The rest of the middleware stack
///
/// # Returns
/// - `Ok(Response)` - The downstream response, or a 429 with rate limit headers
/// - `Err(AppError)` - Authentication failure or database error during lookup
pub async fn rate_limit_layer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let guard = ApiKeyGuard::new(&state.db);
    let key = guard.require(request.headers()).await?;

    let now = Utc::now();
    let endpoint = request.uri().path().to_string();

    let service = RateLimitService::new(&state.db);
    let decision = service.check_and_record(&key, &endpoint, now).await;

    if !decision.allowed {
        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorDto {
                error: "Rate limit exceeded.".to_string(),
            }),
        )
            .into_response();
        apply_rate_limit_headers(response.headers_mut(), &decision);
        return Ok(response);
    }

    let repo = ApiKeyRepository::new(&state.db);
    if let Err(err) = repo.touch_last_used(key.id, now).await {
        tracing::warn!("Failed to update last use for API key {}: {}", key.id, err);
    }

    request.extensions_mut().insert(key);

    let mut response = next.run(request).await;
    apply_rate_limit_headers(response.headers_mut(), &decision);
    Ok(response)
}

/// Attaches the rate limit headers derived from a decision.
fn apply_rate_limit_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
    insert_status(
        headers,
        HeaderName::from_static("x-ratelimit-limit"),
        HeaderName::from_static("x-ratelimit-remaining"),
        HeaderName::from_static("x-ratelimit-reset"),
        &decision.legacy,
    );

    for (window, status) in &decision.windows {
        let (limit, remaining, reset) = window_header_names(*window);
        insert_status(headers, limit, remaining, reset, status);
    }

    if !decision.allowed {
        headers.insert(RETRY_AFTER, decision.retry_after_secs.into());
    }
}

fn insert_status(
    headers: &mut HeaderMap,
    limit: HeaderName,
    remaining: HeaderName,
    reset: HeaderName,
    status: &WindowStatus,
) {
    headers.insert(limit, status.limit.into());
    headers.insert(remaining, status.remaining.into());
    headers.insert(reset, status.reset_at.timestamp().into());
}

/// The limit/remaining/reset header names for one window.
fn window_header_names(window: RateLimitWindow) -> (HeaderName, HeaderName, HeaderName) {
    match window {
        RateLimitWindow::Second => (
            HeaderName::from_static("x-ratelimit-limit-second"),
            HeaderName::from_static("x-ratelimit-remaining-second"),
            HeaderName::from_static("x-ratelimit-reset-second"),
        ),
        RateLimitWindow::Minute => (
            HeaderName::from_static("x-ratelimit-limit-minute"),
            HeaderName::from_static("x-ratelimit-remaining-minute"),
            HeaderName::from_static("x-ratelimit-reset-minute"),
        ),
        RateLimitWindow::FifteenMinutes => (
            HeaderName::from_static("x-ratelimit-limit-15min"),
            HeaderName::from_static("x-ratelimit-remaining-15min"),
            HeaderName::from_static("x-ratelimit-reset-15min"),
        ),
    }
}
