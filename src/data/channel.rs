//! Channel data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::channel::Channel};

/// Repository providing database operations for channels.
pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    /// Creates a new ChannelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChannelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active channel by name.
    pub async fn find(&self, name: &str) -> Result<Option<Channel>, AppError> {
        let entity = entity::prelude::Channel::find()
            .filter(entity::channel::Column::Name.eq(name))
            .filter(entity::channel::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Channel::from_entity))
    }

    /// Finds a channel by name, including soft-deleted records.
    pub async fn find_any(&self, name: &str) -> Result<Option<Channel>, AppError> {
        let entity = entity::prelude::Channel::find()
            .filter(entity::channel::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Channel::from_entity))
    }

    /// Inserts a new enabled channel.
    ///
    /// # Arguments
    /// - `name` - Channel name
    ///
    /// # Returns
    /// - `Ok(Channel)` - The stored channel including its assigned id
    /// - `Err(AppError)` - Database error
    pub async fn insert(&self, name: &str) -> Result<Channel, AppError> {
        let entity = entity::channel::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            enabled: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Channel::from_entity(entity))
    }

    /// Enables or disables an active channel.
    ///
    /// # Arguments
    /// - `name` - Channel name
    /// - `enabled` - New enabled state
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one active record was updated
    /// - `Ok(false)` - No active record matched
    /// - `Err(AppError)` - Database error
    pub async fn set_enabled(&self, name: &str, enabled: bool) -> Result<bool, AppError> {
        let update = entity::channel::ActiveModel {
            enabled: ActiveValue::Set(enabled),
            ..Default::default()
        };

        let result = entity::prelude::Channel::update_many()
            .set(update)
            .filter(entity::channel::Column::Name.eq(name))
            .filter(entity::channel::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Soft-deletes an active channel by name.
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one active record was marked deleted
    /// - `Ok(false)` - No active record matched
    /// - `Err(AppError)` - Database error
    pub async fn soft_delete(&self, name: &str) -> Result<bool, AppError> {
        let update = entity::channel::ActiveModel {
            enabled: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        };

        let result = entity::prelude::Channel::update_many()
            .set(update)
            .filter(entity::channel::Column::Name.eq(name))
            .filter(entity::channel::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
