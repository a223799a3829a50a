//! Error types for the fallback client

use thiserror::Error;

/// Result type alias for fallback client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fallback client
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Errors reported by the remote API in its response body
    #[error("API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A single attempt exceeded its network timeout
    #[error("request timed out after {millis}ms")]
    Timeout { millis: u64 },

    /// Every candidate model was tried and failed
    #[error("All models failed: {0}")]
    AllModelsFailed(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new HTTP transport error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// Create a new remote API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a new timeout error
    pub const fn timeout(millis: u64) -> Self {
        Self::Timeout { millis }
    }

    /// Create the terminal aggregate error from the per-attempt log
    pub fn all_models_failed(log: &[String]) -> Self {
        Self::AllModelsFailed(log.join(" | "))
    }

    /// The bare failure reason used in `"<model>: <reason>"` log entries.
    ///
    /// Strips the variant prefix so the aggregate message stays readable,
    /// and substitutes a fixed placeholder when the message is empty.
    pub fn attempt_reason(&self) -> String {
        let reason = match self {
            Self::Config(m) | Self::Http(m) | Self::Api(m) | Self::Json(m) => m.clone(),
            other => other.to_string(),
        };
        if reason.trim().is_empty() {
            "unknown error".to_string()
        } else {
            reason
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}
