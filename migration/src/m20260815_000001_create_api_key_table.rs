use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApiKey::Table)
                    .if_not_exists()
                    .col(pk_auto(ApiKey::Id))
                    .col(string_uniq(ApiKey::Key))
                    .col(string(ApiKey::Name))
                    .col(boolean(ApiKey::Active))
                    .col(integer(ApiKey::RateLimitPerSecond))
                    .col(integer(ApiKey::RateLimitPerMinute))
                    .col(integer(ApiKey::RateLimitPer15Minutes))
                    .col(timestamp_with_time_zone(ApiKey::CreatedAt))
                    .col(timestamp_with_time_zone_null(ApiKey::LastUsedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApiKey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApiKey {
    Table,
    Id,
    Key,
    Name,
    Active,
    RateLimitPerSecond,
    RateLimitPerMinute,
    RateLimitPer15Minutes,
    CreatedAt,
    LastUsedAt,
}
