//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::user::{CreateUserParams, User},
};

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active user by username.
    ///
    /// Soft-deleted users are excluded, so a deleted account can no longer
    /// log in or be fetched.
    ///
    /// # Arguments
    /// - `username` - Username to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Active user found
    /// - `Ok(None)` - No active user with that name
    /// - `Err(AppError)` - Database error or undecodable stored record
    pub async fn find_active(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by username, including soft-deleted records.
    ///
    /// Used by creation: a username stays reserved even after its account
    /// was soft-deleted.
    pub async fn find_any(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Creation parameters with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user including its assigned id
    /// - `Err(AppError)` - Database error
    pub async fn insert(&self, param: CreateUserParams) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            scopes: ActiveValue::Set(serde_json::to_value(&param.scopes).map_err(|source| {
                InternalError::UnencodableJson {
                    entity: "user",
                    field: "scopes",
                    source,
                }
            })?),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Soft-deletes an active user by username.
    ///
    /// # Arguments
    /// - `username` - Username to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one active record was marked deleted
    /// - `Ok(false)` - No active record matched
    /// - `Err(AppError)` - Database error
    pub async fn soft_delete(&self, username: &str) -> Result<bool, AppError> {
        let update = entity::user::ActiveModel {
            deleted_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        };

        let result = entity::prelude::User::update_many()
            .set(update)
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
