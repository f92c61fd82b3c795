//! Run status reported by the backend.
//!
//! The backend owns the status lifecycle; the client only reads and reports it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an evaluation or annotation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationStatus {
    /// Run has been created but no work has started
    #[serde(rename = "EVALUATION_INITIALIZED")]
    Initialized,
    /// Run is in progress
    #[serde(rename = "EVALUATION_STARTED")]
    Started,
    /// Run completed and results are aggregated
    #[serde(rename = "EVALUATION_FINISHED")]
    Finished,
    /// Run failed
    #[serde(rename = "EVALUATION_ERROR")]
    Error,
    /// A status string this client does not know about
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

impl EvaluationStatus {
    /// Whether the run is still pending or in progress
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Initialized | Self::Started)
    }

    /// Whether the run has reached a final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Error)
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Initialized => "Queued",
            Self::Started => "Running",
            Self::Finished => "Completed",
            Self::Error => "Failed",
            Self::Unknown => "Unknown",
        }
    }

    /// Wire value as sent by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialized => "EVALUATION_INITIALIZED",
            Self::Started => "EVALUATION_STARTED",
            Self::Finished => "EVALUATION_FINISHED",
            Self::Error => "EVALUATION_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Status-only projection returned by the `/status/` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusProjection {
    /// Current run status
    pub status: EvaluationStatus,
}
