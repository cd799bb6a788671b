//! Scope names and scope-set expansion.
//!
//! A scope is a `resource:action` string naming one permitted action class.
//! The list is closed; the only special case is the `admin:full` marker,
//! which stands for the whole list and is expanded when a session is
//! validated rather than when it is issued, so the full list can grow
//! without re-issuing existing sessions.

pub const CHANNEL_CREATE: &str = "channel:create";
pub const CHANNEL_EDIT: &str = "channel:edit";
pub const CHANNEL_DELETE: &str = "channel:delete";

pub const COMMAND_CREATE: &str = "command:create";
pub const COMMAND_EDIT: &str = "command:edit";
pub const COMMAND_DELETE: &str = "command:delete";

pub const QUOTE_CREATE: &str = "quote:create";
pub const QUOTE_EDIT: &str = "quote:edit";
pub const QUOTE_DELETE: &str = "quote:delete";

pub const USER_CREATE: &str = "user:create";
pub const USER_EDIT: &str = "user:edit";
pub const USER_DELETE: &str = "user:delete";

/// Marker scope standing for the complete scope list.
pub const ADMIN_FULL: &str = "admin:full";

/// Every concrete scope, in resource order. The `admin:full` marker is not
/// part of this list; it expands to it.
pub const FULL_SCOPES: [&str; 12] = [
    CHANNEL_CREATE,
    CHANNEL_EDIT,
    CHANNEL_DELETE,
    COMMAND_CREATE,
    COMMAND_EDIT,
    COMMAND_DELETE,
    QUOTE_CREATE,
    QUOTE_EDIT,
    QUOTE_DELETE,
    USER_CREATE,
    USER_EDIT,
    USER_DELETE,
];

/// The complete scope list as owned strings.
pub fn full_scopes() -> Vec<String> {
    FULL_SCOPES.iter().map(|s| s.to_string()).collect()
}

/// Scopes granted when a request does not name any.
pub fn default_scopes() -> Vec<String> {
    full_scopes()
}

/// Expands a granted scope set into the effective scope set.
///
/// If the granted set contains the [`ADMIN_FULL`] marker the effective set
/// is the complete enumerated list; otherwise the granted set is returned
/// unchanged. Called at validation time on every authenticated request.
///
/// # Arguments
/// - `granted` - Scopes stored on the session at issuance
///
/// # Returns
/// - `Vec<String>` - The effective scope set for authorization checks
pub fn expand(granted: &[String]) -> Vec<String> {
    if granted.iter().any(|scope| scope == ADMIN_FULL) {
        full_scopes()
    } else {
        granted.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a plain scope set passes through expansion unchanged.
    #[test]
    fn plain_scopes_are_not_expanded() {
        let granted = vec![COMMAND_EDIT.to_string(), QUOTE_CREATE.to_string()];
        assert_eq!(expand(&granted), granted);
    }

    /// Tests that the admin:full marker expands to the complete list.
    #[test]
    fn admin_full_expands_to_complete_list() {
        let granted = vec![ADMIN_FULL.to_string()];
        assert_eq!(expand(&granted), full_scopes());
    }

    /// Tests that the marker dominates even when mixed with concrete scopes.
    #[test]
    fn admin_full_dominates_mixed_set() {
        let granted = vec![COMMAND_EDIT.to_string(), ADMIN_FULL.to_string()];
        assert_eq!(expand(&granted), full_scopes());
    }

    /// Tests that the marker itself is not part of the concrete list.
    #[test]
    fn marker_is_not_a_concrete_scope() {
        assert!(!FULL_SCOPES.contains(&ADMIN_FULL));
    }
}
