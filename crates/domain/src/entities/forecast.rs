//! Raw forecast payload, as handed over by the forecast fetcher

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current-instant readings (Celsius, km/h)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCurrent {
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius, when the upstream provides it
    pub apparent_temperature: Option<f64>,
    /// Relative humidity in percent
    pub humidity: u16,
    /// WMO weather code
    pub weather_code: i32,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
}

/// Daily series as parallel arrays; index `i` of every array is the same day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawDailySeries {
    pub dates: Vec<NaiveDate>,
    pub max_temps: Vec<f64>,
    pub min_temps: Vec<f64>,
    pub weather_codes: Vec<i32>,
}

impl RawDailySeries {
    /// Lengths of the four arrays, in field order
    #[must_use]
    pub fn lengths(&self) -> [usize; 4] {
        [
            self.dates.len(),
            self.max_temps.len(),
            self.min_temps.len(),
            self.weather_codes.len(),
        ]
    }
}

/// Forecast fetcher output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastPayload {
    pub current: RawCurrent,
    pub daily: RawDailySeries,
}
