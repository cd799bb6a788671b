use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quote::Table)
                    .if_not_exists()
                    .col(pk_auto(Quote::Id))
                    .col(big_integer(Quote::QuoteId))
                    .col(string(Quote::Channel))
                    .col(string(Quote::Quoted))
                    .col(json(Quote::Quote))
                    .col(big_integer(Quote::Count))
                    .col(boolean(Quote::Enabled))
                    .col(timestamp_with_time_zone(Quote::CreatedAt))
                    .col(timestamp_with_time_zone_null(Quote::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quote_channel_quote_id")
                    .table(Quote::Table)
                    .col(Quote::Channel)
                    .col(Quote::QuoteId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Quote {
    Table,
    Id,
    QuoteId,
    Channel,
    Quoted,
    Quote,
    Count,
    Enabled,
    CreatedAt,
    DeletedAt,
}
