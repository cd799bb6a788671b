pub use super::channel::Entity as Channel;
pub use super::command::Entity as Command;
pub use super::quote::Entity as Quote;
pub use super::user::Entity as User;
