//! SDK error types
//!
//! Transport failures are surfaced unchanged; nothing in the SDK retries or
//! recovers from them.

use std::fmt;
use thiserror::Error;
use variant_eval_domain::DomainError;

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Authentication failed or credentials are invalid
    #[error("Authentication failed: {message}")]
    Unauthorized {
        /// Error message
        message: String,
    },

    /// Access to the resource is forbidden
    #[error("Access forbidden: {message}")]
    Forbidden {
        /// Error message
        message: String,
    },

    /// Resource was not found
    #[error("Resource not found: {path} ({message})")]
    NotFound {
        /// Request path that was not found
        path: String,
        /// Message from the backend
        message: String,
    },

    /// Request validation failed
    #[error("Validation failed: {message}")]
    ValidationError {
        /// Error message
        message: String,
        /// Field-specific errors
        field_errors: Vec<FieldError>,
    },

    /// Conflict with existing resource
    #[error("Conflict: {message}")]
    Conflict {
        /// Error message
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Server error
    #[error("Server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },

    /// Any other non-success status
    #[error("API error ({status_code}): {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },

    /// A response body did not have the expected shape
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// Error message
        message: String,
    },

    /// A response had the right shape but violated a record contract
    #[error(transparent)]
    MalformedRecord(#[from] DomainError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Error message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SdkError {
    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::Unauthorized { .. } => Some(401),
            SdkError::Forbidden { .. } => Some(403),
            SdkError::NotFound { .. } => Some(404),
            SdkError::Conflict { .. } => Some(409),
            SdkError::ValidationError { .. } => Some(422),
            SdkError::RateLimited => Some(429),
            SdkError::ServerError { status_code, .. } => Some(*status_code),
            SdkError::ApiError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether the backend reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::NotFound { .. })
    }

    /// Build the error for a non-success HTTP status
    pub fn from_status(status_code: u16, path: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            401 => SdkError::Unauthorized { message },
            403 => SdkError::Forbidden { message },
            404 => SdkError::NotFound {
                path: path.to_string(),
                message,
            },
            409 => SdkError::Conflict { message },
            400 | 422 => SdkError::ValidationError {
                message,
                field_errors: Vec::new(),
            },
            429 => SdkError::RateLimited,
            500..=599 => SdkError::ServerError {
                status_code,
                message,
            },
            _ => SdkError::ApiError {
                status_code,
                message,
            },
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        SdkError::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Field-specific validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field path, e.g. `body.variant_ids`
    pub field: String,
    /// Error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Convert from reqwest errors
impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SdkError::Timeout
        } else if err.is_connect() {
            SdkError::NetworkError {
                message: "Connection failed".to_string(),
                source: Some(Box::new(err)),
            }
        } else if err.is_decode() {
            SdkError::InvalidResponse {
                message: err.to_string(),
            }
        } else {
            SdkError::NetworkError {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

/// Convert from JSON errors
impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::SerializationError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
