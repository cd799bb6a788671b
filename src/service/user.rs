//! User account business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::credentials,
    session::scopes,
};

/// Service implementing user account rules on top of the repository.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an active user by username.
    ///
    /// # Returns
    /// - `Ok(User)` - The active user
    /// - `Err(AppError::NotFound)` - No active user with that name
    pub async fn get(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_active(username)
            .await?
            .ok_or_else(|| user_not_found(username))
    }

    /// Creates a new user account.
    ///
    /// The password is hashed before anything is stored. A username stays
    /// reserved even after its account was soft-deleted, so creation
    /// conflicts with deleted records too. When no scopes are named the
    /// standard scope set is granted.
    ///
    /// # Arguments
    /// - `username` - Desired username
    /// - `password` - Cleartext password
    /// - `scopes` - Scopes to grant, or `None` for the default set
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::Conflict)` - The username is taken
    pub async fn create(
        &self,
        username: &str,
        password: &str,
        scopes: Option<Vec<String>>,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_any(username).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User {:?} already exists",
                username
            )));
        }

        let password_hash = credentials::hash_password(password)?;

        repo.insert(CreateUserParams {
            username: username.to_string(),
            password_hash,
            scopes: scopes.unwrap_or_else(scopes::default_scopes),
        })
        .await
    }

    /// Checks a login attempt and returns the account on success.
    ///
    /// An unknown username and a wrong password produce the same error, so
    /// the login endpoint cannot be used to probe for accounts. Soft-deleted
    /// accounts cannot log in.
    ///
    /// # Arguments
    /// - `username` - Claimed username
    /// - `password` - Cleartext password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - They are not
    pub async fn verify_login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_active(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !credentials::verify_password(&user.password_hash, password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Soft-deletes a user account.
    ///
    /// # Returns
    /// - `Ok(())` - Exactly one active record was marked deleted
    /// - `Err(AppError::NotFound)` - No active user with that name
    pub async fn delete(&self, username: &str) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).soft_delete(username).await?;

        if deleted {
            Ok(())
        } else {
            Err(user_not_found(username))
        }
    }
}

fn user_not_found(username: &str) -> AppError {
    AppError::NotFound(format!("User {:?} not found", username))
}
