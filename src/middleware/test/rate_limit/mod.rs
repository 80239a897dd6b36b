use crate::middleware::rate_limit::rate_limit_layer;
use crate::state::AppState;
use axum::{middleware::from_fn_with_state, routing::get, Router};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::builder::TestBuilder;


/// Builds a router with one test route behind the rate limiting middleware.
fn test_app(db: &DatabaseConnection) -> Router {
    let state = AppState::new(db.clone(), "admin-secret".to_string());

    Router::new()
        .route("/api/test", get(|| async { "ok" }))
        .layer(from_fn_with_state(state.clone(), rate_limit_layer))
        .with_state(state)
}
