//! Domain Errors
//!
//! Error taxonomy for a single market search. Every variant is turned into a
//! `{success: false, error}` envelope at the HTTP boundary; none escape it.

use std::time::Duration;

use thiserror::Error;

/// Search errors, each mapped to an HTTP status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Bad or missing input. No upstream call was made.
    #[error("{0}")]
    Validation(String),

    /// Provider credential missing. Fails every request until fixed.
    #[error("{0}")]
    Configuration(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Search provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Unexpected(String),
}

impl SearchError {
    pub fn query_required() -> Self {
        Self::Validation("Query is required".to_string())
    }

    pub fn not_configured() -> Self {
        Self::Configuration("Firecrawl connector not configured".to_string())
    }

    /// HTTP status code reported to the caller.
    ///
    /// Upstream failures mirror the provider's status; timeouts surface as 504.
    pub fn status_code(&self) -> u16 {
        match self {
            SearchError::Validation(_) => 400,
            SearchError::Configuration(_) => 500,
            SearchError::Upstream { status, .. } => *status,
            SearchError::Timeout(_) => 504,
            SearchError::Unexpected(_) => 500,
        }
    }

    /// Text placed in the envelope's `error` field.
    pub fn client_message(&self) -> String {
        match self {
            SearchError::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
