//! Geocoding client port

use std::future::Future;

use citysearch_domain::SearchResponse;

/// Port for searching cities by name.
///
/// Implementations never fail: network errors, non-2xx statuses and
/// unreadable bodies are all normalized into the returned
/// [`SearchResponse`], so assertions run over every outcome the same way.
pub trait GeocodingClient: Send + Sync {
    /// Issues one search for `name` and waits for the answer.
    fn search_city(&self, name: &str) -> impl Future<Output = SearchResponse> + Send;
}
