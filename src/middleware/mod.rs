//! Request middleware and authorization guards.

pub mod auth;
