//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::session::store::SessionStore;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `SessionStore` is an `Arc` handle (clones share the session map)
/// - `Duration` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Session store owned by the serving component.
    ///
    /// Constructed once at startup; every handler sees the same sessions.
    /// Process-local, so all sessions are lost on restart by design.
    pub sessions: SessionStore,

    /// How long issued sessions stay valid.
    pub session_ttl: Duration,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `sessions` - Session store instance
    /// - `session_ttl` - TTL for newly issued sessions
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, sessions: SessionStore, session_ttl: Duration) -> Self {
        Self {
            db,
            sessions,
            session_ttl,
        }
    }
}
