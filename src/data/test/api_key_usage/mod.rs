use crate::data::api_key_usage::ApiKeyUsageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_since;
mod prune_older_than;
