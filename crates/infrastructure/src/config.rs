//! Endpoint configuration.
//!
//! Values are layered: built-in defaults, then an optional
//! `citysearch.toml` in the working directory, then `CITYSEARCH_*`
//! environment variables (`CITYSEARCH_BASE_URL`, `CITYSEARCH_TIMEOUT_MS`,
//! `CITYSEARCH_USER_AGENT`).

use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

/// Public Open-Meteo geocoding search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Prefix of the environment variables read by [`GeocodingConfig::load`].
pub const ENV_PREFIX: &str = "CITYSEARCH";

const CONFIG_FILE: &str = "citysearch";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The base URL does not parse.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The configured value.
        url: String,
        /// Parse failure.
        source: url::ParseError,
    },

    /// The base URL is not http(s).
    #[error("unsupported scheme '{scheme}' in base URL (expected http or https)")]
    UnsupportedScheme {
        /// The configured scheme.
        scheme: String,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Settings for the geocoding search client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeocodingConfig {
    /// Search endpoint; the query goes into its `name` parameter.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("citysearch/{}", env!("CARGO_PKG_VERSION"))
}

impl GeocodingConfig {
    /// Loads defaults, `citysearch.toml` (optional) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or the base URL is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix(ENV_PREFIX), Some(CONFIG_FILE))
    }

    /// Loads defaults overridden by the given variables instead of the
    /// process environment. Keys carry the `CITYSEARCH_` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed or the base URL is invalid.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::build(
            Environment::with_prefix(ENV_PREFIX).source(Some(vars)),
            None,
        )
    }

    fn build(environment: Environment, file: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_ms", defaults.timeout_ms)?
            .set_default("user_agent", defaults.user_agent)?;
        if let Some(name) = file {
            builder = builder.add_source(File::with_name(name).required(false));
        }

        let config: Self = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.endpoint()?;
        Ok(config)
    }

    /// Replaces the base URL (builder pattern).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The parsed search endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or is not http(s).
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeocodingConfig::from_vars(Vec::<(String, String)>::new())
            .expect("defaults are valid");
        assert_eq!(config, GeocodingConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("citysearch/"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = GeocodingConfig::from_vars([
            ("CITYSEARCH_BASE_URL", "http://localhost:8080/v1/search"),
            ("CITYSEARCH_TIMEOUT_MS", "1500"),
        ])
        .expect("valid overrides");

        assert_eq!(config.base_url, "http://localhost:8080/v1/search");
        assert_eq!(config.timeout_ms, 1500);
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = GeocodingConfig::from_vars([("CITYSEARCH_BASE_URL", "not a url")])
            .expect_err("invalid url");
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));

        let err = GeocodingConfig::from_vars([("CITYSEARCH_BASE_URL", "ftp://example.com")])
            .expect_err("unsupported scheme");
        assert!(matches!(err, ConfigError::UnsupportedScheme { scheme } if scheme == "ftp"));
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        let err = GeocodingConfig::from_vars([("CITYSEARCH_TIMEOUT_MS", "soon")])
            .expect_err("invalid timeout");
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_with_base_url() {
        let config = GeocodingConfig::default().with_base_url("http://127.0.0.1:9/search");
        let endpoint = config.endpoint().expect("valid url");
        assert_eq!(endpoint.port(), Some(9));
    }
}
