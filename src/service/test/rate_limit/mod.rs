use crate::model::api_key::ApiKey;
use crate::service::rate_limit::RateLimitService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
