//! Normalized search response
//!
//! Transport errors, non-2xx answers and undecodable bodies are folded into
//! one shape so assertions run uniformly over success and failure paths.

use std::time::Duration;

use super::payload::SearchPayload;

/// Status reported when the request never produced an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 500;

/// How a search call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// 2xx with a JSON body.
    Success(SearchPayload),
    /// Anything else. The payload is kept when the error body was JSON.
    Failed {
        /// Decoded error body, if any.
        payload: Option<SearchPayload>,
        /// Human-readable cause.
        message: String,
    },
}

/// Response of one search call, created once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    /// HTTP status code, or [`TRANSPORT_FAILURE_STATUS`].
    pub status: u16,
    /// Body or failure.
    pub outcome: SearchOutcome,
    /// Client-side round-trip time.
    pub elapsed: Duration,
}

impl SearchResponse {
    /// A successful response.
    #[must_use]
    pub const fn success(status: u16, payload: SearchPayload, elapsed: Duration) -> Self {
        Self {
            status,
            outcome: SearchOutcome::Success(payload),
            elapsed,
        }
    }

    /// A response that reached the server but was rejected or unreadable.
    #[must_use]
    pub fn failed(
        status: u16,
        payload: Option<SearchPayload>,
        message: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            outcome: SearchOutcome::Failed {
                payload,
                message: message.into(),
            },
            elapsed,
        }
    }

    /// A request that never got an HTTP response.
    #[must_use]
    pub fn transport_failure(message: impl Into<String>, elapsed: Duration) -> Self {
        Self::failed(TRANSPORT_FAILURE_STATUS, None, message, elapsed)
    }

    /// The decoded body, on either path.
    #[must_use]
    pub const fn data(&self) -> Option<&SearchPayload> {
        match &self.outcome {
            SearchOutcome::Success(payload) => Some(payload),
            SearchOutcome::Failed { payload, .. } => payload.as_ref(),
        }
    }

    /// The failure message, if the call failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            SearchOutcome::Success(_) => None,
            SearchOutcome::Failed { message, .. } => Some(message),
        }
    }

    /// Returns true for a decoded 2xx response.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Success(_))
    }
}
