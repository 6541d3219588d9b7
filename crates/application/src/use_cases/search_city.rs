//! Search city use case.

use std::sync::Arc;

use citysearch_domain::SearchResponse;

use crate::ports::GeocodingClient;

/// Issues a single city search.
pub struct SearchCity<C: GeocodingClient> {
    client: Arc<C>,
}

impl<C: GeocodingClient> SearchCity<C> {
    /// Creates a new `SearchCity` use case.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Searches for `name`. Failures are part of the returned response.
    pub async fn execute(&self, name: &str) -> SearchResponse {
        let response = self.client.search_city(name).await;
        tracing::info!(
            query = name,
            status = response.status,
            results = response.data().map_or(0, |d| d.result_count()),
            elapsed = ?response.elapsed,
            "city search completed"
        );
        response
    }
}
