//! Channel factory for creating test channel entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channels with customizable fields.
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    enabled: bool,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> ChannelFactory<'a> {
    /// Creates a new ChannelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"channel{id}"` where id is auto-incremented
    /// - enabled: `true`
    /// - deleted_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ChannelFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("channel{}", id),
            enabled: true,
            deleted_at: None,
        }
    }

    /// Sets the channel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the channel is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Marks the channel as soft-deleted at the given time.
    pub fn deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    /// Builds and inserts the channel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::channel::Model)` - Created channel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        entity::channel::ActiveModel {
            name: ActiveValue::Set(self.name),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel with the given name and default values.
///
/// Shorthand for `ChannelFactory::new(db).name(name).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Channel name
///
/// # Returns
/// - `Ok(entity::channel::Model)` - Created channel entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_channel(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db).name(name).build().await
}
