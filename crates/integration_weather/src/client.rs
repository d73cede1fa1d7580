//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo Forecast API. Requests current readings and
//! a daily max/min/code series in Celsius and km/h.

use std::time::Duration;

use async_trait::async_trait;
use domain::RawForecastPayload;
use domain::value_objects::{GeoLocation, InvalidCoordinates};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ApiResponse;

/// Fields requested in the `current` block
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";

/// Fields requested in the `daily` block
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Coordinates outside the valid range; no request was sent
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Forecast service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl ForecastConfig {
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

/// Forecast client trait
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current readings and the daily series for a location
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawForecastPayload, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: ForecastConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ForecastConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(ForecastConfig::default())
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        GeoLocation::new(latitude, longitude)?;
        Ok(())
    }

    /// Query parameters for a forecast request
    fn forecast_params(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            (
                "forecast_days",
                self.config.forecast_days.clamp(1, 16).to_string(),
            ),
            ("wind_speed_unit", "kmh".to_string()),
        ]
    }

    fn map_send_error(e: &reqwest::Error) -> WeatherError {
        if e.is_timeout() {
            WeatherError::Timeout
        } else if e.is_connect() {
            WeatherError::ConnectionFailed(e.to_string())
        } else {
            WeatherError::RequestFailed(e.to_string())
        }
    }

    fn check_status(response: &Response) -> Result<(), WeatherError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawForecastPayload, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.forecast_params(latitude, longitude))
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        Self::check_status(&response)?;

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let payload = api_response.into_payload()?;
        debug!(days = payload.daily.dates.len(), "Received forecast");
        Ok(payload)
    }
}
