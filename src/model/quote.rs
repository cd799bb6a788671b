//! Quote domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{internal::InternalError, AppError},
    model::{lifecycle::Lifecycle, message::MessageComponent},
};

/// Quote captured from a channel's chat.
///
/// `quote_id` is a per-channel sequence assigned at creation and is the
/// identifier clients address quotes by; the storage-assigned `id` never
/// leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Per-channel sequence number, starting at 1.
    pub quote_id: i64,
    /// Channel the quote belongs to.
    pub channel: String,
    /// Who the quote is attributed to.
    pub quoted: String,
    /// Ordered message components of the quote.
    pub quote: Vec<MessageComponent>,
    /// How often the quote has been invoked.
    pub count: i64,
    /// Whether the quote is currently enabled.
    pub enabled: bool,
    /// When the quote was created.
    pub created_at: DateTime<Utc>,
    /// Soft-deletion state.
    pub lifecycle: Lifecycle,
}

impl Quote {
    /// Converts an entity model to a quote domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Quote)` - The converted quote domain model
    /// - `Err(AppError::Internal(_))` - Stored quote JSON failed to decode
    pub fn from_entity(entity: entity::quote::Model) -> Result<Self, AppError> {
        let quote: Vec<MessageComponent> =
            serde_json::from_value(entity.quote).map_err(|source| {
                InternalError::MalformedStoredJson {
                    entity: "quote",
                    field: "quote",
                    source,
                }
            })?;

        Ok(Self {
            id: entity.id,
            quote_id: entity.quote_id,
            channel: entity.channel,
            quoted: entity.quoted,
            quote,
            count: entity.count,
            enabled: entity.enabled,
            created_at: entity.created_at,
            lifecycle: Lifecycle::from_deleted_at(entity.deleted_at),
        })
    }

    /// Converts the quote domain model to a DTO for API responses.
    pub fn into_dto(self) -> QuoteDto {
        QuoteDto {
            quote_id: self.quote_id,
            channel: self.channel,
            quoted: self.quoted,
            quote: self.quote,
            count: self.count,
            enabled: self.enabled,
        }
    }
}

/// Quote shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDto {
    #[serde(rename = "quoteId")]
    pub quote_id: i64,
    pub channel: String,
    pub quoted: String,
    pub quote: Vec<MessageComponent>,
    pub count: i64,
    pub enabled: bool,
}

/// Parameters for creating a new quote.
///
/// The per-channel `quote_id` is assigned by the service, not the caller.
#[derive(Debug, Clone)]
pub struct CreateQuoteParams {
    pub channel: String,
    pub quoted: String,
    pub quote: Vec<MessageComponent>,
}
