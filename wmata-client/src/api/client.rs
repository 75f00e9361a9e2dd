//! WMATA HTTP client.
//!
//! Provides the core fetch path shared by every endpoint wrapper:
//! build a URL, attach the API key header, issue one blocking GET,
//! decode the body as JSON or as a GTFS-realtime feed.

use gtfs_realtime::FeedMessage;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::realtime::decode_feed;

/// Default base URL for the WMATA API.
const DEFAULT_BASE_URL: &str = "https://api.wmata.com";

/// Configuration for the WMATA client.
#[derive(Debug, Clone)]
pub struct WmataConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WmataConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// WMATA API client.
///
/// Every wrapper method performs exactly one synchronous GET and decodes
/// one response. There are no retries and no shared mutable state, so a
/// client can be cloned and used from multiple threads independently.
#[derive(Debug, Clone)]
pub struct WmataClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl WmataClient {
    /// Create a new WMATA client with the given configuration.
    pub fn new(config: WmataConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        // WMATA authenticates with an "api_key" header on every request
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| ApiError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("api_key", api_key);

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Issue one GET and return the response after status triage.
    ///
    /// `desc` is the human-readable operation description used to tag
    /// log output, so a failed call can be traced back to its caller.
    fn fetch(
        &self,
        path: &str,
        params: &[(&str, String)],
        desc: &str,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(%url, "{desc}");

        let response = self.http.get(&url).query(params).send().map_err(|e| {
            tracing::warn!("failed to {desc}: {e}");
            ApiError::Http(e)
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!("failed to {desc}: unauthorized");
            return Err(ApiError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("failed to {desc}: rate limited");
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!("failed to {desc}: status {status}");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }

    /// GET `path` and decode the JSON response body.
    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        desc: &str,
    ) -> Result<T, ApiError> {
        let response = self.fetch(path, params, desc)?;

        let body = response.text().map_err(|e| {
            tracing::warn!("failed to {desc}: {e}");
            ApiError::Http(e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("failed to {desc}: {e}");
            ApiError::Json {
                message: format!("{e} (body: {})", snippet(&body)),
            }
        })
    }

    /// GET `path` and decode the body as a GTFS-realtime feed.
    pub(crate) fn get_feed(&self, path: &str, desc: &str) -> Result<FeedMessage, ApiError> {
        let bytes = self.get_bytes(path, desc)?;

        decode_feed(&bytes).map_err(|e| {
            tracing::warn!("failed to {desc}: {e}");
            e
        })
    }

    /// GET `path` and return the raw response body.
    pub(crate) fn get_bytes(&self, path: &str, desc: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.fetch(path, &[], desc)?;

        let bytes = response.bytes().map_err(|e| {
            tracing::warn!("failed to {desc}: {e}");
            ApiError::Http(e)
        })?;

        Ok(bytes.to_vec())
    }
}

/// Truncate a response body for inclusion in an error message.
fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = WmataConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = WmataConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = WmataConfig::new("test-key");
        let client = WmataClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let config = WmataConfig::new("bad\nkey");
        assert!(WmataClient::new(config).is_err());
    }

    #[test]
    fn failed_fetch_is_an_error_not_a_panic() {
        // Nothing listens on the discard port; the connection is
        // refused without leaving the local machine.
        let config = WmataConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(5);
        let client = WmataClient::new(config).unwrap();

        let result: Result<serde_json::Value, ApiError> =
            client.get_json("/Rail.svc/json/jLines", &[], "get rail lines");
        assert!(matches!(result, Err(ApiError::Http(_))));
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(snippet(&body).len(), 200);
        assert_eq!(snippet("short"), "short");
    }

    // Integration tests against the live API require a real key and
    // network access; they belong in an #[ignore]d test, run separately.
}
