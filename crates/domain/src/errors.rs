//! Error types for the evaluation domain.

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised while converting server records into domain shapes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A server record violates a structural contract that serde cannot
    /// express, such as parallel arrays of different lengths
    #[error("Malformed record '{id}': {reason}")]
    MalformedRecord {
        /// Identifier of the offending record
        id: String,
        /// What was wrong with it
        reason: String,
    },

    /// A timestamp string could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl DomainError {
    /// Create a malformed record error
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "MALFORMED_RECORD",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
        }
    }
}
