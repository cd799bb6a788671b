//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{internal::InternalError, AppError},
    model::lifecycle::Lifecycle,
};

/// Platform user with credentials and granted scopes.
///
/// The password hash stays inside the domain model and the data layer; it is
/// never serialized into a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Username; the natural key.
    pub username: String,
    /// Argon2 PHC hash of the user's password.
    pub password_hash: String,
    /// Scopes granted to this user at creation.
    pub scopes: Vec<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// Soft-deletion state.
    pub lifecycle: Lifecycle,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::Internal(_))` - Stored scopes JSON failed to decode
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let scopes: Vec<String> = serde_json::from_value(entity.scopes).map_err(|source| {
            InternalError::MalformedStoredJson {
                entity: "user",
                field: "scopes",
                source,
            }
        })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            scopes,
            created_at: entity.created_at,
            lifecycle: Lifecycle::from_deleted_at(entity.deleted_at),
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here; only the public profile leaves
    /// the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            scopes: self.scopes,
        }
    }
}

/// User shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub username: String,
    pub scopes: Vec<String>,
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    /// Already-hashed password; controllers hash before calling the data layer.
    pub password_hash: String,
    pub scopes: Vec<String>,
}
