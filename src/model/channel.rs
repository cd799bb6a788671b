//! Channel domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::lifecycle::Lifecycle;

/// Channel a bot is managed for.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Channel name; the natural key.
    pub name: String,
    /// Whether the bot is enabled in this channel.
    pub enabled: bool,
    /// When the channel was registered.
    pub created_at: DateTime<Utc>,
    /// Soft-deletion state.
    pub lifecycle: Lifecycle,
}

impl Channel {
    /// Converts an entity model to a channel domain model at the repository boundary.
    pub fn from_entity(entity: entity::channel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            enabled: entity.enabled,
            created_at: entity.created_at,
            lifecycle: Lifecycle::from_deleted_at(entity.deleted_at),
        }
    }

    /// Converts the channel domain model to a DTO for API responses.
    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            name: self.name,
            enabled: self.enabled,
        }
    }
}

/// Channel shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDto {
    pub name: String,
    pub enabled: bool,
}
