use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_api_key_table::ApiKey;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApiKeyUsage::Table)
                    .if_not_exists()
                    .col(pk_auto(ApiKeyUsage::Id))
                    .col(integer(ApiKeyUsage::ApiKeyId))
                    .col(string(ApiKeyUsage::Endpoint))
                    .col(timestamp_with_time_zone(ApiKeyUsage::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_api_key_usage_api_key_id")
                            .from(ApiKeyUsage::Table, ApiKeyUsage::ApiKeyId)
                            .to(ApiKey::Table, ApiKey::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Window counts filter on (api_key_id, timestamp) for every request
        manager
            .create_index(
                Index::create()
                    .name("idx_api_key_usage_key_timestamp")
                    .table(ApiKeyUsage::Table)
                    .col(ApiKeyUsage::ApiKeyId)
                    .col(ApiKeyUsage::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApiKeyUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApiKeyUsage {
    Table,
    Id,
    ApiKeyId,
    Endpoint,
    Timestamp,
}
