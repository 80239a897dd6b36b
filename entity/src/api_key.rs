use sea_orm::entity::prelude::*;

/// API key issued to an external client (bot, automation, or integration).
///
/// Carries the per-window rate limit ceilings the limiter enforces for this key.
/// A ceiling of 0 means requests on that window are always denied.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "api_key")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The opaque key token presented in the `X-Api-Key` header.
    #[sea_orm(unique)]
    pub key: String,
    /// Human-readable label identifying the key's owner.
    pub name: String,
    /// Whether the key is currently accepted for authentication.
    pub active: bool,
    /// Maximum requests allowed within any 1 second window.
    pub rate_limit_per_second: i32,
    /// Maximum requests allowed within any 60 second window.
    pub rate_limit_per_minute: i32,
    /// Maximum requests allowed within any 900 second window.
    pub rate_limit_per_15_minutes: i32,
    pub created_at: DateTimeUtc,
    pub last_used_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::api_key_usage::Entity")]
    ApiKeyUsage,
}

impl Related<super::api_key_usage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiKeyUsage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
