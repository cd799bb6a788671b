//! Business logic layer between controllers and repositories.
//!
//! Services own the rules that span more than one storage call: conflict
//! checks on creation, the command mutation engine and its counter grammar,
//! per-channel quote numbering, and credential hashing.

pub mod command;
pub mod credentials;
pub mod quote;
pub mod user;

#[cfg(test)]
mod test;
