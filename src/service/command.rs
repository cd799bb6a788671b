//! Command business logic, including the attribute mutation engine.

use sea_orm::DatabaseConnection;

use crate::{
    data::command::CommandRepository,
    error::AppError,
    model::command::{Command, CommandUpdate, CounterOp, CreateCommandParams},
};

/// Service implementing command rules on top of the repository.
pub struct CommandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active commands of a channel.
    pub async fn list(&self, channel: &str) -> Result<Vec<Command>, AppError> {
        CommandRepository::new(self.db).list(channel).await
    }

    /// Gets a single active command.
    ///
    /// # Returns
    /// - `Ok(Command)` - The active command
    /// - `Err(AppError::NotFound)` - No active command for the pair
    pub async fn get(&self, channel: &str, name: &str) -> Result<Command, AppError> {
        CommandRepository::new(self.db)
            .find(channel, name)
            .await?
            .ok_or_else(|| command_not_found(channel, name))
    }

    /// Creates a new command.
    ///
    /// An active record under the same `(channel, name)` is a conflict. A
    /// soft-deleted remnant under the key is physically removed first and
    /// then replaced by the fresh record, so re-creating a deleted command
    /// starts over with a zero counter.
    ///
    /// # Arguments
    /// - `param` - Creation parameters (key, response, restrictions)
    ///
    /// # Returns
    /// - `Ok(Command)` - The stored command
    /// - `Err(AppError::Conflict)` - An active command already owns the key
    pub async fn create(&self, param: CreateCommandParams) -> Result<Command, AppError> {
        let repo = CommandRepository::new(self.db);

        match repo.find_any(&param.channel, &param.name).await? {
            Some(existing) if existing.lifecycle.is_active() => Err(AppError::Conflict(format!(
                "Command {:?} already exists in channel {:?}",
                param.name, param.channel
            ))),
            Some(remnant) => {
                repo.delete_hard(remnant.id).await?;
                repo.insert(param).await
            }
            None => repo.insert(param).await,
        }
    }

    /// Applies one update operation to a stored command.
    ///
    /// Loads the active record for `(channel, name)`, applies the operation,
    /// and persists the whole record back. The read-modify-write sequence is
    /// not serialized across requests; two concurrent updates to the same
    /// command race and the last write wins.
    ///
    /// Counter policy: a malformed counter expression is accepted and
    /// ignored. The parser rejects it, this engine swallows the rejection,
    /// leaves the stored record untouched, and still reports the update as
    /// applied. Both historical implementations of this platform behave this
    /// way, so it is preserved as documented policy rather than fixed here.
    ///
    /// # Arguments
    /// - `channel` - Channel the command belongs to
    /// - `name` - Command name within the channel
    /// - `update` - The edit to apply
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one stored record was updated (or the update
    ///   was a counter no-op)
    /// - `Ok(false)` - The write matched no record, e.g. it was deleted
    ///   between the read and the write
    /// - `Err(AppError::NotFound)` - No active command for the pair; storage
    ///   is untouched
    pub async fn update_attribute(
        &self,
        channel: &str,
        name: &str,
        update: CommandUpdate,
    ) -> Result<bool, AppError> {
        let repo = CommandRepository::new(self.db);

        let Some(mut command) = repo.find(channel, name).await? else {
            return Err(command_not_found(channel, name));
        };

        match update {
            CommandUpdate::SetName(new_name) => command.name = new_name,
            CommandUpdate::SetResponse(response) => command.response = response,
            CommandUpdate::SetEnabled(enabled) => command.enabled = enabled,
            CommandUpdate::SetRole(role) => command.restrictions.role = role,
            CommandUpdate::SetService(service) => command.restrictions.service = service,
            CommandUpdate::AdjustCount(raw) => match CounterOp::parse(&raw) {
                Ok(op) => command.count = op.apply(command.count),
                // Accepted-but-ignored per platform policy; see above.
                Err(_) => return Ok(true),
            },
        }

        let matched = repo.replace(&command).await?;
        Ok(matched == 1)
    }

    /// Soft-deletes a command.
    ///
    /// # Returns
    /// - `Ok(())` - Exactly one active record was marked deleted
    /// - `Err(AppError::NotFound)` - No active command for the pair
    pub async fn delete(&self, channel: &str, name: &str) -> Result<(), AppError> {
        let deleted = CommandRepository::new(self.db)
            .soft_delete(channel, name)
            .await?;

        if deleted {
            Ok(())
        } else {
            Err(command_not_found(channel, name))
        }
    }
}

fn command_not_found(channel: &str, name: &str) -> AppError {
    AppError::NotFound(format!(
        "Command {:?} not found in channel {:?}",
        name, channel
    ))
}
