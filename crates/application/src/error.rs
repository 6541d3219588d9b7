//! Application error types

use citysearch_domain::ValidationError;
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The search endpoint did not answer the availability probe with 200.
    #[error("API is not available. Status: {status}{}", detail(.message.as_deref()))]
    Unavailable {
        /// Status returned by the probe.
        status: u16,
        /// Transport error message, if any.
        message: Option<String>,
    },

    /// A response did not satisfy its contract.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

fn detail(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
