//! Domain models and API DTOs.
//!
//! Domain models are converted from entity models at the repository boundary
//! and into DTOs at the controller boundary, keeping SeaORM types out of the
//! business logic layer.

pub mod api;
pub mod channel;
pub mod command;
pub mod lifecycle;
pub mod message;
pub mod quote;
pub mod user;
