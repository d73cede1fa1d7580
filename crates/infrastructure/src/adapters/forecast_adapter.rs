//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::SearchError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::RawForecastPayload;
use domain::value_objects::GeoLocation;
use integration_weather::{ForecastConfig, OpenMeteoClient, WeatherClient, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the forecast fetcher using the Open-Meteo API
#[derive(Debug)]
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, WeatherError> {
        Ok(Self {
            client: OpenMeteoClient::with_defaults()?,
        })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: ForecastConfig) -> Result<Self, WeatherError> {
        Ok(Self {
            client: OpenMeteoClient::new(config)?,
        })
    }

    /// Map integration weather error to search error
    fn map_error(err: WeatherError) -> SearchError {
        match err {
            WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RateLimitExceeded
            | WeatherError::Timeout => SearchError::UpstreamUnavailable(err.to_string()),
            WeatherError::ParseError(_) | WeatherError::InvalidCoordinates(_) => {
                SearchError::MalformedPayload(err.to_string())
            },
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch(&self, location: &GeoLocation) -> Result<RawForecastPayload, SearchError> {
        let result = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(payload) => {
                debug!(
                    temperature = payload.current.temperature,
                    code = payload.current.weather_code,
                    days = payload.daily.dates.len(),
                    "Retrieved forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result
    }
}
