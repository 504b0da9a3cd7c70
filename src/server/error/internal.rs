use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored user id into a UUID
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse UUID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: uuid::Error,
    },

    /// Stored enum value does not match any known variant
    ///
    /// Occurs when a row contains a motorcycle model or maintenance status written
    /// outside of the application.
    #[error("Unknown {kind} '{value}' stored in database")]
    UnknownStoredValue {
        /// Which kind of value failed to parse
        kind: &'static str,
        /// The stored value
        value: String,
    },

    /// Password hashing or hash parsing failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task panicked or was cancelled before finishing
    #[error(transparent)]
    BlockingTask(#[from] tokio::task::JoinError),
}
