//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let command = factory::command::create_command(&db, "somechannel").await?;
//!     let quote = factory::quote::create_quote(&db, "somechannel").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let command = factory::command::CommandFactory::new(&db)
//!     .channel("somechannel")
//!     .name("greet")
//!     .count(10)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `channel` - Create channel entities
//! - `command` - Create command entities
//! - `quote` - Create quote entities
//! - `user` - Create user entities
//! - `helpers` - ID generation shared across factories

pub mod channel;
pub mod command;
pub mod helpers;
pub mod quote;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use channel::create_channel;
pub use command::create_command;
pub use quote::create_quote;
pub use user::create_user;
