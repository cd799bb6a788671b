use chrono::{DateTime, Utc};

/// Record lifecycle state.
///
/// Replaces scattered null checks on a `deleted_at` column with an explicit
/// state: a record is either `Active` or `Deleted` with the timestamp of its
/// soft deletion. Deleted records stay in storage but are invisible to reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Record is live and visible to reads.
    Active,
    /// Record was soft-deleted at the contained time.
    Deleted(DateTime<Utc>),
}

impl Lifecycle {
    /// Builds the lifecycle state from a nullable deletion timestamp column.
    pub fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            Some(when) => Self::Deleted(when),
            None => Self::Active,
        }
    }

    /// The deletion timestamp column value for this state.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active => None,
            Self::Deleted(when) => Some(*when),
        }
    }

    /// Whether the record is live.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_round_trips_through_null_column() {
        let state = Lifecycle::from_deleted_at(None);
        assert_eq!(state, Lifecycle::Active);
        assert!(state.is_active());
        assert_eq!(state.deleted_at(), None);
    }

    #[test]
    fn deleted_round_trips_through_timestamp_column() {
        let when = Utc::now();
        let state = Lifecycle::from_deleted_at(Some(when));
        assert_eq!(state, Lifecycle::Deleted(when));
        assert!(!state.is_active());
        assert_eq!(state.deleted_at(), Some(when));
    }
}
