//! Command factory for creating test command entities.
//!
//! This module provides factory methods for creating command entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test commands with customizable fields.
///
/// Provides a builder pattern for creating command entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::command::CommandFactory;
///
/// let command = CommandFactory::new(&db)
///     .channel("somechannel")
///     .name("greet")
///     .count(10)
///     .build()
///     .await?;
/// ```
pub struct CommandFactory<'a> {
    db: &'a DatabaseConnection,
    channel: String,
    name: String,
    count: i64,
    enabled: bool,
    response: serde_json::Value,
    services: serde_json::Value,
    role: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> CommandFactory<'a> {
    /// Creates a new CommandFactory with default values.
    ///
    /// Defaults:
    /// - channel: `"channel{id}"` where id is auto-incremented
    /// - name: `"command{id}"`
    /// - count: `0`, enabled: `true`
    /// - response: a single text component
    /// - services: empty list, role: `"user"`
    /// - deleted_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CommandFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            channel: format!("channel{}", id),
            name: format!("command{}", id),
            count: 0,
            enabled: true,
            response: json!([{ "type": "text", "data": "Hello!" }]),
            services: json!([]),
            role: "user".to_string(),
            deleted_at: None,
        }
    }

    /// Sets the channel the command belongs to.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Sets the command name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the invocation counter.
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Sets whether the command is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the response components as raw JSON.
    pub fn response(mut self, response: serde_json::Value) -> Self {
        self.response = response;
        self
    }

    /// Sets the service restriction list as raw JSON.
    pub fn services(mut self, services: serde_json::Value) -> Self {
        self.services = services;
        self
    }

    /// Sets the role restriction.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Marks the command as soft-deleted at the given time.
    pub fn deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    /// Builds and inserts the command entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::command::Model)` - Created command entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::command::Model, DbErr> {
        entity::command::ActiveModel {
            channel: ActiveValue::Set(self.channel),
            name: ActiveValue::Set(self.name),
            count: ActiveValue::Set(self.count),
            enabled: ActiveValue::Set(self.enabled),
            response: ActiveValue::Set(self.response),
            services: ActiveValue::Set(self.services),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a command in the given channel with default values.
///
/// Shorthand for `CommandFactory::new(db).channel(channel).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel` - Channel the command belongs to
///
/// # Returns
/// - `Ok(entity::command::Model)` - Created command entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_command(
    db: &DatabaseConnection,
    channel: &str,
) -> Result<entity::command::Model, DbErr> {
    CommandFactory::new(db).channel(channel).build().await
}
