//! Geocoding client implementation using reqwest.
//!
//! This adapter implements the `GeocodingClient` port against the
//! Open-Meteo search endpoint. Every failure is folded into the returned
//! `SearchResponse`; nothing is propagated past this boundary.

use std::time::Instant;

use citysearch_application::ports::GeocodingClient;
use citysearch_domain::{SearchPayload, SearchResponse};
use reqwest::Client;
use url::Url;

use crate::config::{ConfigError, GeocodingConfig};

/// Query parameter carrying the searched name.
const NAME_PARAM: &str = "name";

/// Geocoding client for the Open-Meteo search API.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    endpoint: Url,
}

impl OpenMeteoClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be
    /// created.
    pub fn new(config: &GeocodingConfig) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint()?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// The configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for a search.
    #[must_use]
    pub fn search_url(&self, name: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(NAME_PARAM, name);
        url
    }

    /// Describes a transport error for the normalized response.
    fn describe_error(error: &reqwest::Error) -> String {
        if error.is_timeout() {
            return format!("request timed out: {error}");
        }
        if error.is_connect() {
            return format!("connection failed: {error}");
        }
        if error.is_redirect() {
            return format!("too many redirects: {error}");
        }
        error.to_string()
    }

    async fn send(&self, name: &str) -> SearchResponse {
        let url = self.search_url(name);
        tracing::debug!(%url, "sending city search");
        let start = Instant::now();

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let message = Self::describe_error(&e);
                tracing::warn!(query = name, error = %message, "city search transport failure");
                return SearchResponse::transport_failure(message, start.elapsed());
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(query = name, %status, error = %e, "failed to read response body");
                return SearchResponse::failed(
                    status.as_u16(),
                    None,
                    format!("failed to read body: {e}"),
                    start.elapsed(),
                );
            }
        };
        let elapsed = start.elapsed();
        let json = serde_json::from_slice::<serde_json::Value>(&body);

        if status.is_success() {
            match json {
                Ok(value) => {
                    SearchResponse::success(status.as_u16(), SearchPayload::from_value(value), elapsed)
                }
                Err(e) => SearchResponse::failed(
                    status.as_u16(),
                    None,
                    format!("invalid JSON body: {e}"),
                    elapsed,
                ),
            }
        } else {
            tracing::warn!(query = name, %status, "city search rejected");
            SearchResponse::failed(
                status.as_u16(),
                json.ok().map(SearchPayload::from_value),
                format!("HTTP {status}"),
                elapsed,
            )
        }
    }
}

impl GeocodingClient for OpenMeteoClient {
    async fn search_city(&self, name: &str) -> SearchResponse {
        self.send(name).await
    }
}
