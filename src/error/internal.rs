use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column read back from the database failed to decode.
    ///
    /// Indicates a record written outside the application or a schema drift.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Failed to decode stored {entity}.{field} JSON: {source}")]
    MalformedStoredJson {
        /// Table the record came from
        entity: &'static str,
        /// Column that failed to decode
        field: &'static str,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A domain value failed to encode into its JSON column.
    ///
    /// Should be unreachable for the types this application stores; kept so
    /// the data layer can propagate instead of panicking. Results in a 500
    /// Internal Server Error with a generic message returned to the client.
    #[error("Failed to encode {entity}.{field} for storage: {source}")]
    UnencodableJson {
        /// Table the record was headed for
        entity: &'static str,
        /// Column that failed to encode
        field: &'static str,
        /// The underlying encode error
        #[source]
        source: serde_json::Error,
    },

    /// Password hashing failed.
    ///
    /// The argon2 error is carried as text since it does not implement the
    /// standard error trait in this configuration. Results in a 500 Internal
    /// Server Error with a generic message returned to the client.
    #[error("Password hashing failed: {reason}")]
    PasswordHash {
        /// Description of the underlying hashing failure
        reason: String,
    },

    /// A stored string column holds a value outside its closed domain.
    ///
    /// For example a `role` column value that is not one of the enumerated
    /// roles. Results in a 500 Internal Server Error with a generic message
    /// returned to the client.
    #[error("Stored {entity}.{field} value {value:?} is outside the expected domain")]
    MalformedStoredValue {
        /// Table the record came from
        entity: &'static str,
        /// Column holding the bad value
        field: &'static str,
        /// The offending value
        value: String,
    },
}
