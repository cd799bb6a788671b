//! Command domain models and update operations.
//!
//! A command is identified by its `(channel, name)` pair. Edits to a command
//! are expressed as a closed set of [`CommandUpdate`] operations rather than
//! free-form attribute strings; anything outside that set is rejected at the
//! request boundary before storage is touched. The invocation counter has its
//! own tiny expression language, parsed by [`CounterOp`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::{
    error::{internal::InternalError, AppError},
    model::{lifecycle::Lifecycle, message::MessageComponent},
};

/// Chat role a command can be restricted to.
///
/// Closed list; serialized lowercase both in the database and over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Banned,
    User,
    Subscriber,
    Moderator,
    Owner,
}

/// Error produced when a string does not name a [`Role`].
#[derive(Error, Debug)]
#[error("{0:?} is not a valid role")]
pub struct InvalidRole(pub String);

impl Role {
    /// The lowercase name this role is stored and serialized as.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banned => "banned",
            Self::User => "user",
            Self::Subscriber => "subscriber",
            Self::Moderator => "moderator",
            Self::Owner => "owner",
        }
    }
}

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "banned" => Ok(Self::Banned),
            "user" => Ok(Self::User),
            "subscriber" => Ok(Self::Subscriber),
            "moderator" => Ok(Self::Moderator),
            "owner" => Ok(Self::Owner),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may invoke a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restrictions {
    /// Services the command is limited to; empty means all services.
    pub service: Vec<String>,
    /// Minimum chat role required to invoke the command.
    pub role: Role,
}

/// Command with response components, invocation counter, and restrictions.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Channel the command belongs to; half of the natural key.
    pub channel: String,
    /// Command name; unique within its channel.
    pub name: String,
    /// Invocation counter, mutated through the counter grammar.
    pub count: i64,
    /// Whether the command is currently enabled.
    pub enabled: bool,
    /// Ordered message components, opaque to the backend.
    pub response: Vec<MessageComponent>,
    /// Invocation restrictions.
    pub restrictions: Restrictions,
    /// When the command was created.
    pub created_at: DateTime<Utc>,
    /// Soft-deletion state.
    pub lifecycle: Lifecycle,
}

impl Command {
    /// Converts an entity model to a command domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Command)` - The converted command domain model
    /// - `Err(AppError::Internal(_))` - Stored JSON column or role value failed to decode
    pub fn from_entity(entity: entity::command::Model) -> Result<Self, AppError> {
        let response: Vec<MessageComponent> =
            serde_json::from_value(entity.response).map_err(|source| {
                InternalError::MalformedStoredJson {
                    entity: "command",
                    field: "response",
                    source,
                }
            })?;
        let service: Vec<String> = serde_json::from_value(entity.services).map_err(|source| {
            InternalError::MalformedStoredJson {
                entity: "command",
                field: "services",
                source,
            }
        })?;
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|_| InternalError::MalformedStoredValue {
                entity: "command",
                field: "role",
                value: entity.role.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            channel: entity.channel,
            name: entity.name,
            count: entity.count,
            enabled: entity.enabled,
            response,
            restrictions: Restrictions { service, role },
            created_at: entity.created_at,
            lifecycle: Lifecycle::from_deleted_at(entity.deleted_at),
        })
    }

    /// Converts the command domain model to a DTO for API responses.
    pub fn into_dto(self) -> CommandDto {
        CommandDto {
            channel: self.channel,
            name: self.name,
            count: self.count,
            enabled: self.enabled,
            response: self.response,
            restrictions: RestrictionsDto {
                service: self.restrictions.service,
                role: self.restrictions.role,
            },
        }
    }
}

/// Command shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDto {
    pub channel: String,
    pub name: String,
    pub count: i64,
    pub enabled: bool,
    pub response: Vec<MessageComponent>,
    pub restrictions: RestrictionsDto,
}

/// Restriction shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestrictionsDto {
    pub service: Vec<String>,
    pub role: Role,
}

/// Parameters for creating a new command.
#[derive(Debug, Clone)]
pub struct CreateCommandParams {
    pub channel: String,
    pub name: String,
    pub response: Vec<MessageComponent>,
    pub services: Vec<String>,
    pub role: Role,
}

/// One edit to a stored command.
///
/// The closed set of update operations the mutation engine accepts. The
/// request boundary converts the wire-level `{attribute, value}` pair into
/// one of these via [`CommandUpdate::from_attribute`]; unknown attribute
/// names never reach the engine or storage.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandUpdate {
    /// Rename the command within its channel.
    SetName(String),
    /// Replace the response components wholesale.
    SetResponse(Vec<MessageComponent>),
    /// Enable or disable the command.
    SetEnabled(bool),
    /// Replace `restrictions.role`, leaving `restrictions.service` untouched.
    SetRole(Role),
    /// Replace `restrictions.service`, leaving `restrictions.role` untouched.
    SetService(Vec<String>),
    /// Apply a counter expression (`N`, `+N`, `-N`) to the invocation count.
    /// Carries the raw string; parsing happens in the engine so its
    /// accepted-no-op policy for malformed values stays in one place.
    AdjustCount(String),
}

impl CommandUpdate {
    /// Converts a wire-level attribute/value pair into an update operation.
    ///
    /// # Arguments
    /// - `attribute` - Attribute name from the request
    /// - `value` - Raw JSON value from the request
    ///
    /// # Returns
    /// - `Ok(CommandUpdate)` - Recognized attribute with a well-typed value
    /// - `Err(AppError::BadRequest(_))` - Unknown attribute, or a value of the
    ///   wrong shape for the attribute; storage has not been touched
    pub fn from_attribute(attribute: &str, value: serde_json::Value) -> Result<Self, AppError> {
        match attribute {
            "name" => match value.as_str() {
                Some(name) => Ok(Self::SetName(name.to_string())),
                None => Err(AppError::BadRequest(
                    "name value must be a string".to_string(),
                )),
            },
            "response" => serde_json::from_value(value)
                .map(Self::SetResponse)
                .map_err(|_| {
                    AppError::BadRequest(
                        "response value must be a list of message components".to_string(),
                    )
                }),
            "enabled" => match value.as_bool() {
                Some(enabled) => Ok(Self::SetEnabled(enabled)),
                None => Err(AppError::BadRequest(
                    "enabled value must be a boolean".to_string(),
                )),
            },
            "role" => match value.as_str() {
                Some(role) => role
                    .parse::<Role>()
                    .map(Self::SetRole)
                    .map_err(|e| AppError::BadRequest(e.to_string())),
                None => Err(AppError::BadRequest(
                    "role value must be a string".to_string(),
                )),
            },
            "service" => serde_json::from_value(value)
                .map(Self::SetService)
                .map_err(|_| {
                    AppError::BadRequest("service value must be a list of strings".to_string())
                }),
            "count" => match value.as_str() {
                Some(raw) => Ok(Self::AdjustCount(raw.to_string())),
                None => Err(AppError::BadRequest(
                    "count value must be a string counter expression".to_string(),
                )),
            },
            other => Err(AppError::BadRequest(format!(
                "unknown command attribute {:?}",
                other
            ))),
        }
    }
}

/// Parsed counter expression.
///
/// The counter grammar distinguishes an absolute value from a sign-prefixed
/// delta by inspecting the first character, so `"5"` sets while `"+5"` and
/// `"-5"` adjust. This must stay an explicit parser: numeric coercion of the
/// whole string cannot tell `"5"` from `"+5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterOp {
    /// `N` - set the counter to an absolute value.
    Set(i64),
    /// `+N` - add to the counter.
    Add(i64),
    /// `-N` - subtract from the counter.
    Sub(i64),
}

/// Error produced when a string is not a counter expression.
///
/// Whether this is surfaced to the caller is the engine's policy decision;
/// the parser itself always rejects malformed input.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{0:?} is not a counter expression")]
pub struct CounterParseError(pub String);

impl CounterOp {
    /// Parses a counter expression.
    ///
    /// # Arguments
    /// - `value` - Raw expression string: `N`, `+N`, or `-N`
    ///
    /// # Returns
    /// - `Ok(CounterOp)` - A well-formed expression
    /// - `Err(CounterParseError)` - Anything else, including the empty string,
    ///   a bare sign, or trailing garbage after the digits
    pub fn parse(value: &str) -> Result<Self, CounterParseError> {
        let mut chars = value.chars();
        let first = chars
            .next()
            .ok_or_else(|| CounterParseError(value.to_string()))?;
        let rest = chars.as_str();

        if first.is_ascii_digit() {
            if let Ok(n) = value.parse::<i64>() {
                return Ok(Self::Set(n));
            }
        } else if first == '+' {
            if let Ok(n) = rest.parse::<i64>() {
                return Ok(Self::Add(n));
            }
        } else if first == '-' {
            if let Ok(n) = rest.parse::<i64>() {
                return Ok(Self::Sub(n));
            }
        }

        Err(CounterParseError(value.to_string()))
    }

    /// Applies the expression to a current counter value.
    ///
    /// Additions and subtractions saturate at the i64 bounds.
    pub fn apply(self, count: i64) -> i64 {
        match self {
            Self::Set(n) => n,
            Self::Add(n) => count.saturating_add(n),
            Self::Sub(n) => count.saturating_sub(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests the absolute-set form of the counter grammar.
    #[test]
    fn counter_absolute_set() {
        assert_eq!(CounterOp::parse("5"), Ok(CounterOp::Set(5)));
        assert_eq!(CounterOp::parse("0"), Ok(CounterOp::Set(0)));
        assert_eq!(CounterOp::parse("42"), Ok(CounterOp::Set(42)));
        assert_eq!(CounterOp::parse("5").unwrap().apply(10), 5);
    }

    /// Tests the increment form of the counter grammar.
    #[test]
    fn counter_increment() {
        assert_eq!(CounterOp::parse("+3"), Ok(CounterOp::Add(3)));
        assert_eq!(CounterOp::parse("+3").unwrap().apply(10), 13);
        assert_eq!(CounterOp::parse("+0").unwrap().apply(10), 10);
    }

    /// Tests the decrement form of the counter grammar.
    #[test]
    fn counter_decrement() {
        assert_eq!(CounterOp::parse("-4"), Ok(CounterOp::Sub(4)));
        assert_eq!(CounterOp::parse("-4").unwrap().apply(10), 6);
    }

    /// Tests that a sign prefix is distinguished from an absolute value.
    ///
    /// `"+5"` must adjust, not set; this is the case a numeric-coercion
    /// shortcut would get wrong since both parse to the same integer.
    #[test]
    fn counter_sign_prefix_is_not_absolute() {
        assert_eq!(CounterOp::parse("+5").unwrap().apply(10), 15);
        assert_eq!(CounterOp::parse("5").unwrap().apply(10), 5);
    }

    /// Tests that malformed expressions are rejected by the parser.
    ///
    /// The engine may choose to treat these as accepted no-ops, but the
    /// parser itself must reject them so the two behaviors stay separable.
    #[test]
    fn counter_rejects_malformed_values() {
        for value in ["abc", "", "+", "-", "12abc", " 5", "+ 3", "--2", "5 "] {
            assert_eq!(
                CounterOp::parse(value),
                Err(CounterParseError(value.to_string())),
                "expected {:?} to be rejected",
                value
            );
        }
    }

    /// Tests that additions saturate rather than wrap.
    #[test]
    fn counter_saturates_at_bounds() {
        assert_eq!(CounterOp::Add(1).apply(i64::MAX), i64::MAX);
        assert_eq!(CounterOp::Sub(1).apply(i64::MIN), i64::MIN);
    }

    /// Tests conversion of recognized attributes into update operations.
    #[test]
    fn from_attribute_recognizes_known_attributes() {
        assert_eq!(
            CommandUpdate::from_attribute("name", json!("greet")).unwrap(),
            CommandUpdate::SetName("greet".to_string())
        );
        assert_eq!(
            CommandUpdate::from_attribute("enabled", json!(false)).unwrap(),
            CommandUpdate::SetEnabled(false)
        );
        assert_eq!(
            CommandUpdate::from_attribute("role", json!("moderator")).unwrap(),
            CommandUpdate::SetRole(Role::Moderator)
        );
        assert_eq!(
            CommandUpdate::from_attribute("service", json!(["twitch"])).unwrap(),
            CommandUpdate::SetService(vec!["twitch".to_string()])
        );
        assert_eq!(
            CommandUpdate::from_attribute("count", json!("+3")).unwrap(),
            CommandUpdate::AdjustCount("+3".to_string())
        );
    }

    /// Tests that unknown attributes are rejected at the boundary.
    #[test]
    fn from_attribute_rejects_unknown_attribute() {
        let result = CommandUpdate::from_attribute("cooldown", json!(5));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that a wrongly-typed value is rejected at the boundary.
    #[test]
    fn from_attribute_rejects_wrong_value_shape() {
        assert!(matches!(
            CommandUpdate::from_attribute("enabled", json!("yes")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            CommandUpdate::from_attribute("count", json!(5)),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            CommandUpdate::from_attribute("role", json!("emperor")),
            Err(AppError::BadRequest(_))
        ));
    }

    /// Tests role parsing against the closed role list.
    #[test]
    fn role_parses_known_names_only() {
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("banned".parse::<Role>().unwrap(), Role::Banned);
        assert!("Owner".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
    }
}
