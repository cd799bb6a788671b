//! Quote factory for creating test quote entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test quotes with customizable fields.
///
/// Provides a builder pattern for creating quote entities with default values
/// that can be overridden as needed for specific test scenarios.
pub struct QuoteFactory<'a> {
    db: &'a DatabaseConnection,
    quote_id: i64,
    channel: String,
    quoted: String,
    quote: serde_json::Value,
    count: i64,
    enabled: bool,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> QuoteFactory<'a> {
    /// Creates a new QuoteFactory with default values.
    ///
    /// Defaults:
    /// - quote_id: auto-incremented
    /// - channel: `"channel{id}"`
    /// - quoted: `"Quoted {id}"`
    /// - quote: a single text component
    /// - count: `0`, enabled: `true`, deleted_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `QuoteFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            quote_id: id as i64,
            channel: format!("channel{}", id),
            quoted: format!("Quoted {}", id),
            quote: json!([{ "type": "text", "data": "I will hit you with a potato" }]),
            count: 0,
            enabled: true,
            deleted_at: None,
        }
    }

    /// Sets the per-channel quote id.
    pub fn quote_id(mut self, quote_id: i64) -> Self {
        self.quote_id = quote_id;
        self
    }

    /// Sets the channel the quote belongs to.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Sets who the quote is attributed to.
    pub fn quoted(mut self, quoted: impl Into<String>) -> Self {
        self.quoted = quoted.into();
        self
    }

    /// Sets the quote components as raw JSON.
    pub fn quote(mut self, quote: serde_json::Value) -> Self {
        self.quote = quote;
        self
    }

    /// Marks the quote as soft-deleted at the given time.
    pub fn deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    /// Builds and inserts the quote entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::quote::Model)` - Created quote entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::quote::Model, DbErr> {
        entity::quote::ActiveModel {
            quote_id: ActiveValue::Set(self.quote_id),
            channel: ActiveValue::Set(self.channel),
            quoted: ActiveValue::Set(self.quoted),
            quote: ActiveValue::Set(self.quote),
            count: ActiveValue::Set(self.count),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a quote in the given channel with default values.
///
/// Shorthand for `QuoteFactory::new(db).channel(channel).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel` - Channel the quote belongs to
///
/// # Returns
/// - `Ok(entity::quote::Model)` - Created quote entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_quote(
    db: &DatabaseConnection,
    channel: &str,
) -> Result<entity::quote::Model, DbErr> {
    QuoteFactory::new(db).channel(channel).build().await
}
