use sea_orm::entity::prelude::*;

/// Command record. `(channel, name)` is the natural key; at most one
/// non-deleted row exists per pair. `response` and `services` are stored
/// as JSON documents.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "command")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub channel: String,
    pub name: String,
    pub count: i64,
    pub enabled: bool,
    pub response: Json,
    pub services: Json,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
