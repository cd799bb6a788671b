use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Command::Table)
                    .if_not_exists()
                    .col(pk_auto(Command::Id))
                    .col(string(Command::Channel))
                    .col(string(Command::Name))
                    .col(big_integer(Command::Count))
                    .col(boolean(Command::Enabled))
                    .col(json(Command::Response))
                    .col(json(Command::Services))
                    .col(string(Command::Role))
                    .col(timestamp_with_time_zone(Command::CreatedAt))
                    .col(timestamp_with_time_zone_null(Command::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_command_channel_name")
                    .table(Command::Table)
                    .col(Command::Channel)
                    .col(Command::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Command::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Command {
    Table,
    Id,
    Channel,
    Name,
    Count,
    Enabled,
    Response,
    Services,
    Role,
    CreatedAt,
    DeletedAt,
}
