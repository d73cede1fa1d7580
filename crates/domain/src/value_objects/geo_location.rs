//! Coordinates of a resolved place

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Coordinates rejected by [`GeoLocation::new`]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("coordinates out of range: latitude {latitude}, longitude {longitude}")]
pub struct InvalidCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Latitude/longitude pair in decimal degrees, as returned by the geocoder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    const LATITUDE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
    const LONGITUDE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

    /// Checked constructor; NaN fails both range checks
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if Self::LATITUDE.contains(&latitude) && Self::LONGITUDE.contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Hemisphere notation, e.g. `38.70°N 9.10°W`
impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.2}°{ns} {:.2}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}
