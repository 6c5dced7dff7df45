//! Domain-specific error types for clear-mind

use thiserror::Error;

/// Main error type for the clear-mind service.
///
/// The rule-engine path is total and never produces one of these; only
/// configuration loading and the optional content-provider delegation are
/// fallible, and provider failures are recovered internally by falling back
/// to the rule engine.
#[derive(Error, Debug)]
pub enum ClearMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Timeout error: {operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for ClearMindError {
    fn from(err: anyhow::Error) -> Self {
        ClearMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClearMindError {
    fn from(err: serde_json::Error) -> Self {
        ClearMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClearMindError {
    fn from(err: reqwest::Error) -> Self {
        ClearMindError::Provider {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<std::io::Error> for ClearMindError {
    fn from(err: std::io::Error) -> Self {
        ClearMindError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for clear-mind operations
pub type Result<T> = std::result::Result<T, ClearMindError>;
