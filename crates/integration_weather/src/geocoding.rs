//! Open-Meteo geocoding client
//!
//! Resolves a free-text city name to the single best-matching place using the
//! [Open-Meteo Geocoding API](https://open-meteo.com/en/docs/geocoding-api).

use std::time::Duration;

use async_trait::async_trait;
use domain::ResolvedPlace;
use domain::value_objects::GeoLocation;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::GeocodingResponse;

/// Configuration for the geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Language of the returned place names
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "pt".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            language: default_language(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration pointing at a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// No place matches the query
    #[error("No place matches: {0}")]
    NoMatch(String),

    /// Service is temporarily unavailable
    #[error("Geocoding service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a city name to its best match
    async fn search(&self, name: &str) -> Result<ResolvedPlace, GeocodingError>;
}

/// Open-Meteo geocoding client
#[derive(Debug)]
pub struct OpenMeteoGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl OpenMeteoGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl GeocodingClient for OpenMeteoGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, name: &str) -> Result<ResolvedPlace, GeocodingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GeocodingError::NoMatch(
                "Search text must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.config.base_url);
        let params = [
            ("name", name),
            ("count", "1"),
            ("language", self.config.language.as_str()),
            ("format", "json"),
        ];

        debug!(%name, "Geocoding city");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = body
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| GeocodingError::NoMatch(name.to_string()))?;

        let location = GeoLocation::new(result.latitude, result.longitude)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        debug!(
            place = %result.name,
            lat = %result.latitude,
            lon = %result.longitude,
            "Geocoded city"
        );

        Ok(ResolvedPlace::new(result.name, result.country, location))
    }
}
