//! Command data repository for database operations.
//!
//! Provides the keyed read/replace operations the mutation engine is built
//! on: find by natural key, replace the whole record reporting how many rows
//! matched, and soft deletion. Conversion between entity and domain models
//! happens at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::command::{Command, CreateCommandParams},
};

/// Repository providing database operations for commands.
pub struct CommandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandRepository<'a> {
    /// Creates a new CommandRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommandRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the active command for a `(channel, name)` pair.
    ///
    /// Soft-deleted records are excluded; at most one active record exists
    /// per pair.
    ///
    /// # Arguments
    /// - `channel` - Channel the command belongs to
    /// - `name` - Command name within the channel
    ///
    /// # Returns
    /// - `Ok(Some(Command))` - Active command found
    /// - `Ok(None)` - No active command for the pair
    /// - `Err(AppError)` - Database error or undecodable stored record
    pub async fn find(&self, channel: &str, name: &str) -> Result<Option<Command>, AppError> {
        let entity = entity::prelude::Command::find()
            .filter(entity::command::Column::Channel.eq(channel))
            .filter(entity::command::Column::Name.eq(name))
            .filter(entity::command::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        entity.map(Command::from_entity).transpose()
    }

    /// Finds the command for a `(channel, name)` pair, including soft-deleted.
    ///
    /// Used by creation to distinguish "conflict with an active record" from
    /// "replaceable soft-deleted remnant".
    pub async fn find_any(&self, channel: &str, name: &str) -> Result<Option<Command>, AppError> {
        let entity = entity::prelude::Command::find()
            .filter(entity::command::Column::Channel.eq(channel))
            .filter(entity::command::Column::Name.eq(name))
            .one(self.db)
            .await?;

        entity.map(Command::from_entity).transpose()
    }

    /// Lists all active commands of a channel, ordered by name.
    ///
    /// # Arguments
    /// - `channel` - Channel to list commands for
    ///
    /// # Returns
    /// - `Ok(Vec<Command>)` - Active commands (empty if none)
    /// - `Err(AppError)` - Database error or undecodable stored record
    pub async fn list(&self, channel: &str) -> Result<Vec<Command>, AppError> {
        let entities = entity::prelude::Command::find()
            .filter(entity::command::Column::Channel.eq(channel))
            .filter(entity::command::Column::DeletedAt.is_null())
            .order_by_asc(entity::command::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(Command::from_entity).collect()
    }

    /// Inserts a new command with a zero counter, enabled.
    ///
    /// # Arguments
    /// - `param` - Creation parameters (key, response, restrictions)
    ///
    /// # Returns
    /// - `Ok(Command)` - The stored command including its assigned id
    /// - `Err(AppError)` - Database error (including a unique-key violation
    ///   when an unexpected duplicate slips past the conflict check)
    pub async fn insert(&self, param: CreateCommandParams) -> Result<Command, AppError> {
        let entity = entity::command::ActiveModel {
            channel: ActiveValue::Set(param.channel),
            name: ActiveValue::Set(param.name),
            count: ActiveValue::Set(0),
            enabled: ActiveValue::Set(true),
            response: ActiveValue::Set(encode_json("response", &param.response)?),
            services: ActiveValue::Set(encode_json("services", &param.services)?),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Command::from_entity(entity)
    }

    /// Replaces the stored record with the given command's current state.
    ///
    /// Performs a whole-record write of every mutable field, filtered on the
    /// record id and the active state. The returned count is how many rows
    /// matched the filter; callers treat exactly one as success.
    ///
    /// # Arguments
    /// - `command` - Command whose state should be persisted
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows the write matched (0 or 1)
    /// - `Err(AppError)` - Database error
    pub async fn replace(&self, command: &Command) -> Result<u64, AppError> {
        let update = entity::command::ActiveModel {
            name: ActiveValue::Set(command.name.clone()),
            count: ActiveValue::Set(command.count),
            enabled: ActiveValue::Set(command.enabled),
            response: ActiveValue::Set(encode_json("response", &command.response)?),
            services: ActiveValue::Set(encode_json("services", &command.restrictions.service)?),
            role: ActiveValue::Set(command.restrictions.role.as_str().to_string()),
            ..Default::default()
        };

        let result = entity::prelude::Command::update_many()
            .set(update)
            .filter(entity::command::Column::Id.eq(command.id))
            .filter(entity::command::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Soft-deletes the active command for a `(channel, name)` pair.
    ///
    /// Sets the deletion timestamp and disables the command. The record
    /// stays in storage and becomes invisible to reads.
    ///
    /// # Arguments
    /// - `channel` - Channel the command belongs to
    /// - `name` - Command name within the channel
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one active record was marked deleted
    /// - `Ok(false)` - No active record matched
    /// - `Err(AppError)` - Database error
    pub async fn soft_delete(&self, channel: &str, name: &str) -> Result<bool, AppError> {
        let update = entity::command::ActiveModel {
            enabled: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        };

        let result = entity::prelude::Command::update_many()
            .set(update)
            .filter(entity::command::Column::Channel.eq(channel))
            .filter(entity::command::Column::Name.eq(name))
            .filter(entity::command::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Physically removes a record by id.
    ///
    /// Only used when creation replaces a soft-deleted remnant occupying
    /// the natural key.
    pub async fn delete_hard(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Command::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}

/// Encodes a domain value into a command JSON column.
fn encode_json<T: serde::Serialize>(
    field: &'static str,
    value: &T,
) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(value).map_err(|source| {
        InternalError::UnencodableJson {
            entity: "command",
            field,
            source,
        }
        .into()
    })
}
