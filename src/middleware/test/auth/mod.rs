use crate::error::{auth::AuthError, AppError};
use crate::middleware::auth::{AdminGuard, ApiKeyGuard};
use axum::http::{HeaderMap, HeaderValue};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod require;
