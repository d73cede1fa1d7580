//! Geocoding adapter - Implements LocationPort using integration_weather

use application::error::SearchError;
use application::ports::LocationPort;
use async_trait::async_trait;
use domain::ResolvedPlace;
use integration_weather::{
    GeocodingClient, GeocodingConfig, GeocodingError, OpenMeteoGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for the location resolver using the Open-Meteo Geocoding API
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: OpenMeteoGeocodingClient,
}

impl GeocodingAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, GeocodingError> {
        Self::with_config(GeocodingConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        Ok(Self {
            client: OpenMeteoGeocodingClient::new(config)?,
        })
    }

    /// Map geocoding error to search error
    fn map_error(err: GeocodingError) -> SearchError {
        match err {
            GeocodingError::NoMatch(name) => SearchError::NotFound(name),
            GeocodingError::ParseError(_) => SearchError::MalformedPayload(err.to_string()),
            GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::ServiceUnavailable(_)
            | GeocodingError::RateLimitExceeded
            | GeocodingError::Timeout => SearchError::UpstreamUnavailable(err.to_string()),
        }
    }
}

#[async_trait]
impl LocationPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &str) -> Result<ResolvedPlace, SearchError> {
        let place = self.client.search(query).await.map_err(Self::map_error)?;
        debug!(place = %place.label(), location = %place.location, "Resolved place");
        Ok(place)
    }
}
