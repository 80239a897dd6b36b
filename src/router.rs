use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    controller::{
        api_key::{create_api_key, deactivate_api_key, get_api_keys},
        challenge::score_challenge,
    },
    middleware::rate_limit::rate_limit_layer,
    state::AppState,
};

/// Builds the application router.
///
/// Challenge routes sit behind the API key rate limiting middleware; the admin
/// key management routes authenticate per-handler with the admin token guard.
pub fn router(state: AppState) -> Router<AppState> {
    let challenge_routes = Router::new()
        .route("/api/challenges/score", post(score_challenge))
        .layer(from_fn_with_state(state, rate_limit_layer));

    let admin_routes = Router::new()
        .route("/api/admin/keys", post(create_api_key))
        .route("/api/admin/keys", get(get_api_keys))
        .route("/api/admin/keys/{id}", delete(deactivate_api_key));

    challenge_routes.merge(admin_routes).layer(CorsLayer::permissive())
}
