//! Check availability use case.

use std::sync::Arc;

use crate::ApplicationError;
use crate::ports::GeocodingClient;

/// Probes the search endpoint before a scenario runs.
///
/// The probe is an empty search, which the API answers with 200 and no
/// results when it is healthy.
pub struct CheckAvailability<C: GeocodingClient> {
    client: Arc<C>,
}

impl<C: GeocodingClient> CheckAvailability<C> {
    /// Creates a new `CheckAvailability` use case.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Runs the probe.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Unavailable`] unless the probe answered 200.
    pub async fn execute(&self) -> Result<(), ApplicationError> {
        let response = self.client.search_city("").await;
        if response.status == 200 {
            tracing::debug!(elapsed = ?response.elapsed, "search API available");
            Ok(())
        } else {
            tracing::warn!(status = response.status, error = ?response.error(), "search API unavailable");
            Err(ApplicationError::Unavailable {
                status: response.status,
                message: response.error().map(str::to_string),
            })
        }
    }
}
