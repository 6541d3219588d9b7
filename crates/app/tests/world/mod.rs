//! Per-scenario state for the city search behavioural tests.

use std::sync::Arc;

use citysearch_domain::SearchResponse;
use citysearch_infrastructure::{GeocodingConfig, OpenMeteoClient};
use cucumber::World;

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct CitySearchWorld {
    pub client: Arc<OpenMeteoClient>,
    response: Option<SearchResponse>,
}

impl CitySearchWorld {
    /// Builds a client from `citysearch.toml` / `CITYSEARCH_*`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    fn new() -> Self {
        let config = GeocodingConfig::load().expect("valid citysearch configuration");
        let client = OpenMeteoClient::new(&config).expect("HTTP client");
        Self {
            client: Arc::new(client),
            response: None,
        }
    }

    /// Keeps the latest response for the `Then` steps.
    pub fn store(&mut self, response: SearchResponse) {
        self.response = Some(response);
    }

    /// The latest response.
    ///
    /// # Panics
    /// Panics if no search ran in this scenario yet.
    pub fn response(&self) -> &SearchResponse {
        self.response
            .as_ref()
            .expect("no search has been issued in this scenario")
    }
}
