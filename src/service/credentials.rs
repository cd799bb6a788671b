//! Password hashing and verification.
//!
//! The credential collaborator the session layer consumes: it hashes
//! passwords at user creation and answers login attempts with a plain
//! boolean. Nothing else in the application inspects hashes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{internal::InternalError, AppError};

/// Hashes a password into an argon2 PHC string with a fresh random salt.
///
/// # Arguments
/// - `password` - The cleartext password
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash suitable for storage
/// - `Err(AppError::Internal(_))` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            InternalError::PasswordHash {
                reason: e.to_string(),
            }
            .into()
        })
}

/// Verifies a password against a stored PHC hash.
///
/// A hash that fails to parse counts as a failed verification rather than
/// an error, so a corrupted stored hash locks the account instead of
/// surfacing internals to the login endpoint.
///
/// # Arguments
/// - `stored_hash` - PHC-formatted hash from the user record
/// - `password` - The cleartext password to check
///
/// # Returns
/// - `true` - Password matches the hash
/// - `false` - Wrong password or unparseable hash
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a hashed password verifies against itself.
    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();

        assert_ne!(hash, "hunter2");
        assert!(verify_password(&hash, "hunter2"));
    }

    /// Tests that the wrong password fails verification.
    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("hunter2").unwrap();

        assert!(!verify_password(&hash, "hunter3"));
    }

    /// Tests that hashing salts, so equal passwords get distinct hashes.
    #[test]
    fn equal_passwords_hash_differently() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();

        assert_ne!(first, second);
    }

    /// Tests that an unparseable stored hash fails closed.
    #[test]
    fn malformed_stored_hash_fails_verification() {
        assert!(!verify_password("not-a-real-hash", "hunter2"));
    }
}
