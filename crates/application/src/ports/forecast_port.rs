//! Forecast fetcher port
//!
//! Retrieves current readings and a seven-day daily series for a location,
//! in Celsius and km/h.

use async_trait::async_trait;
use domain::RawForecastPayload;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::SearchError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the raw forecast payload for a location
    async fn fetch(&self, location: &GeoLocation) -> Result<RawForecastPayload, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ForecastPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ForecastPort>();
    }
}
