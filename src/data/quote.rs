//! Quote data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::quote::{CreateQuoteParams, Quote},
};

/// Repository providing database operations for quotes.
pub struct QuoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuoteRepository<'a> {
    /// Creates a new QuoteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `QuoteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the active quote with the given per-channel id.
    ///
    /// # Arguments
    /// - `channel` - Channel the quote belongs to
    /// - `quote_id` - Per-channel quote id
    ///
    /// # Returns
    /// - `Ok(Some(Quote))` - Active quote found
    /// - `Ok(None)` - No active quote with that id
    /// - `Err(AppError)` - Database error or undecodable stored record
    pub async fn find(&self, channel: &str, quote_id: i64) -> Result<Option<Quote>, AppError> {
        let entity = entity::prelude::Quote::find()
            .filter(entity::quote::Column::Channel.eq(channel))
            .filter(entity::quote::Column::QuoteId.eq(quote_id))
            .filter(entity::quote::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        entity.map(Quote::from_entity).transpose()
    }

    /// Lists all active quotes of a channel, ordered by quote id.
    pub async fn list(&self, channel: &str) -> Result<Vec<Quote>, AppError> {
        let entities = entity::prelude::Quote::find()
            .filter(entity::quote::Column::Channel.eq(channel))
            .filter(entity::quote::Column::DeletedAt.is_null())
            .order_by_asc(entity::quote::Column::QuoteId)
            .all(self.db)
            .await?;

        entities.into_iter().map(Quote::from_entity).collect()
    }

    /// Computes the next per-channel quote id.
    ///
    /// Scans all records of the channel including soft-deleted ones, so a
    /// deleted quote's id is never reused. Ids start at 1.
    ///
    /// # Arguments
    /// - `channel` - Channel to compute the next id for
    ///
    /// # Returns
    /// - `Ok(i64)` - Highest existing id plus one, or 1 for a fresh channel
    /// - `Err(AppError)` - Database error
    pub async fn next_quote_id(&self, channel: &str) -> Result<i64, AppError> {
        let newest = entity::prelude::Quote::find()
            .filter(entity::quote::Column::Channel.eq(channel))
            .order_by_desc(entity::quote::Column::QuoteId)
            .one(self.db)
            .await?;

        Ok(newest.map_or(1, |quote| quote.quote_id + 1))
    }

    /// Inserts a new quote with the given per-channel id.
    ///
    /// # Arguments
    /// - `param` - Creation parameters (channel, attribution, components)
    /// - `quote_id` - Per-channel id assigned by the service
    ///
    /// # Returns
    /// - `Ok(Quote)` - The stored quote including its assigned id
    /// - `Err(AppError)` - Database error
    pub async fn insert(&self, param: CreateQuoteParams, quote_id: i64) -> Result<Quote, AppError> {
        let entity = entity::quote::ActiveModel {
            quote_id: ActiveValue::Set(quote_id),
            channel: ActiveValue::Set(param.channel),
            quoted: ActiveValue::Set(param.quoted),
            quote: ActiveValue::Set(encode_json("quote", &param.quote)?),
            count: ActiveValue::Set(0),
            enabled: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Quote::from_entity(entity)
    }

    /// Replaces the stored record with the given quote's current state.
    ///
    /// Whole-record write of the mutable fields, filtered on the record id
    /// and the active state.
    ///
    /// # Arguments
    /// - `quote` - Quote whose state should be persisted
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows the write matched (0 or 1)
    /// - `Err(AppError)` - Database error
    pub async fn replace(&self, quote: &Quote) -> Result<u64, AppError> {
        let update = entity::quote::ActiveModel {
            quoted: ActiveValue::Set(quote.quoted.clone()),
            quote: ActiveValue::Set(encode_json("quote", &quote.quote)?),
            count: ActiveValue::Set(quote.count),
            enabled: ActiveValue::Set(quote.enabled),
            ..Default::default()
        };

        let result = entity::prelude::Quote::update_many()
            .set(update)
            .filter(entity::quote::Column::Id.eq(quote.id))
            .filter(entity::quote::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Soft-deletes the active quote with the given per-channel id.
    ///
    /// Sets the deletion timestamp and disables the quote.
    ///
    /// # Arguments
    /// - `channel` - Channel the quote belongs to
    /// - `quote_id` - Per-channel quote id
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one active record was marked deleted
    /// - `Ok(false)` - No active record matched
    /// - `Err(AppError)` - Database error
    pub async fn soft_delete(&self, channel: &str, quote_id: i64) -> Result<bool, AppError> {
        let update = entity::quote::ActiveModel {
            enabled: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        };

        let result = entity::prelude::Quote::update_many()
            .set(update)
            .filter(entity::quote::Column::Channel.eq(channel))
            .filter(entity::quote::Column::QuoteId.eq(quote_id))
            .filter(entity::quote::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

/// Encodes a domain value into a quote JSON column.
fn encode_json<T: serde::Serialize>(
    field: &'static str,
    value: &T,
) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(value).map_err(|source| {
        InternalError::UnencodableJson {
            entity: "quote",
            field,
            source,
        }
        .into()
    })
}
