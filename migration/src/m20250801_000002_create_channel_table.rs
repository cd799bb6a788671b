use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channel::Table)
                    .if_not_exists()
                    .col(pk_auto(Channel::Id))
                    .col(string_uniq(Channel::Name))
                    .col(boolean(Channel::Enabled))
                    .col(timestamp_with_time_zone(Channel::CreatedAt))
                    .col(timestamp_with_time_zone_null(Channel::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Channel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Channel {
    Table,
    Id,
    Name,
    Enabled,
    CreatedAt,
    DeletedAt,
}
