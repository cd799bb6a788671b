use sea_orm::entity::prelude::*;

/// Quote record. `quote_id` is a per-channel sequence assigned at
/// creation; the message components live in the `quote` JSON column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quote_id: i64,
    pub channel: String,
    pub quoted: String,
    pub quote: Json,
    pub count: i64,
    pub enabled: bool,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
