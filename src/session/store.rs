//! In-memory session store.
//!
//! This module provides the `SessionStore` for issuing, validating, and revoking
//! bearer session tokens. Tokens are opaque random strings used purely as map
//! keys; the store never inspects their contents. Records live in process
//! memory only, so all sessions are lost on restart, which is acceptable
//! behavior for this platform rather than a defect.
//!
//! The store is constructed once at startup, owned by `AppState`, and handed
//! by cloneable handle to every request handler, keeping session state out of
//! process globals and making the store trivial to stand up in tests.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::session::scopes;

/// Length of generated session tokens.
const TOKEN_LENGTH: usize = 32;

/// One issued session.
///
/// The `valid` flag is distinct from expiry; both are checked on every
/// validation. Revocation removes the record outright.
#[derive(Clone)]
struct SessionRecord {
    /// Username of the authenticated subject.
    principal: String,
    /// Scopes granted at issuance. Expansion of the `admin:full` marker
    /// happens at validation time, not here.
    scopes: Vec<String>,
    /// Deadline after which the session is no longer valid.
    expires_at: Instant,
    /// Validity flag, checked in addition to expiry.
    valid: bool,
}

impl SessionRecord {
    /// Whether this record currently authenticates requests.
    ///
    /// Requires the validity flag and an expiry strictly in the future; a
    /// record whose deadline equals the current instant is already expired.
    fn is_live(&self) -> bool {
        self.valid && self.expires_at > Instant::now()
    }
}

/// Store of issued sessions keyed by opaque token.
///
/// Cloning the store is cheap and all clones share the same backing map,
/// so the instance created at startup can be handed to every request
/// handler through `AppState`. The backing map is guarded by an async
/// `RwLock`; concurrent operations on different tokens do not interfere.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl SessionStore {
    /// Creates a new empty session store.
    ///
    /// # Returns
    /// - `SessionStore` - New store with no issued sessions
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issues a new session for a principal.
    ///
    /// Generates a fresh opaque token, stores a record with the granted
    /// scopes and an expiry of `now + ttl`, and returns the token. This
    /// operation does not fail.
    ///
    /// # Arguments
    /// - `principal` - Username of the authenticated subject
    /// - `scopes` - Scopes granted to this session
    /// - `ttl` - How long the session stays valid
    ///
    /// # Returns
    /// - `String` - The opaque bearer token identifying the session
    pub async fn issue(&self, principal: &str, scopes: Vec<String>, ttl: Duration) -> String {
        let token = Self::generate_token();
        let record = SessionRecord {
            principal: principal.to_string(),
            scopes,
            expires_at: Instant::now() + ttl,
            valid: true,
        };

        self.sessions.write().await.insert(token.clone(), record);
        token
    }

    /// Checks whether a token names a live session.
    ///
    /// # Arguments
    /// - `token` - The bearer token to check
    ///
    /// # Returns
    /// - `true` - A record exists, its validity flag is set, and its expiry
    ///   is strictly in the future
    /// - `false` - Unknown, revoked, invalidated, or expired token; unknown
    ///   tokens are not an error
    pub async fn is_valid(&self, token: &str) -> bool {
        self.sessions
            .read()
            .await
            .get(token)
            .is_some_and(SessionRecord::is_live)
    }

    /// Revokes a session.
    ///
    /// Removes the record if present. Revoking an unknown token is a no-op,
    /// not an error, and leaves other sessions untouched.
    ///
    /// # Arguments
    /// - `token` - The bearer token to revoke
    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Returns the effective scope set of a live session.
    ///
    /// The granted set is expanded through [`scopes::expand`] on every call,
    /// so a session holding the `admin:full` marker always reflects the
    /// current full scope list.
    ///
    /// # Arguments
    /// - `token` - The bearer token to look up
    ///
    /// # Returns
    /// - `Some(Vec<String>)` - Effective scopes of a live session
    /// - `None` - Unknown, revoked, invalidated, or expired token
    pub async fn effective_scopes(&self, token: &str) -> Option<Vec<String>> {
        self.sessions
            .read()
            .await
            .get(token)
            .filter(|record| record.is_live())
            .map(|record| scopes::expand(&record.scopes))
    }

    /// Returns the principal of a live session.
    ///
    /// # Arguments
    /// - `token` - The bearer token to look up
    ///
    /// # Returns
    /// - `Some(String)` - Username the session was issued for
    /// - `None` - Unknown, revoked, invalidated, or expired token
    pub async fn principal(&self, token: &str) -> Option<String> {
        self.sessions
            .read()
            .await
            .get(token)
            .filter(|record| record.is_live())
            .map(|record| record.principal.clone())
    }

    /// Generates a random alphanumeric session token.
    ///
    /// Creates a 32-character string using uppercase letters, lowercase
    /// letters, and digits. Uses the system's random number generator.
    ///
    /// # Returns
    /// - `String` - A 32-character random alphanumeric token
    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Clears a session's validity flag without removing the record.
    ///
    /// Used in tests to exercise the flag check independently of expiry
    /// and revocation.
    #[cfg(test)]
    pub async fn invalidate(&self, token: &str) {
        if let Some(record) = self.sessions.write().await.get_mut(token) {
            record.valid = false;
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
