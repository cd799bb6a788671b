//! HTTP request handlers.
//!
//! Controllers validate request bodies, enforce scopes through the
//! [`AuthGuard`](crate::middleware::auth::AuthGuard), convert between DTOs
//! and domain models, and delegate the actual rules to the service layer.
//! Reads are open; every mutating handler names the scope it requires.

pub mod auth;
pub mod channel;
pub mod command;
pub mod quote;
pub mod user;
