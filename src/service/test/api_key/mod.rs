use crate::error::AppError;
use crate::model::api_key::{ApiKeyLimits, CreateApiKeyParam};
use crate::service::api_key::ApiKeyService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
mod deactivate;
