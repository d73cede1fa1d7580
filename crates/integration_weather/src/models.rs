//! Open-Meteo wire models
//!
//! Response shapes of the forecast and geocoding endpoints, and their
//! conversion into domain types.

use chrono::NaiveDate;
use domain::{RawCurrent, RawDailySeries, RawForecastPayload};
use serde::Deserialize;

use crate::client::WeatherError;

/// Forecast endpoint response (only the blocks that are requested)
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub current: Option<CurrentData>,
    pub daily: Option<DailyData>,
}

/// `current` block
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentData {
    pub temperature_2m: f64,
    pub relative_humidity_2m: u16,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
}

/// `daily` block, parallel arrays
#[derive(Debug, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<i32>,
}

impl ApiResponse {
    /// Convert into the domain payload
    ///
    /// Array lengths are passed through untouched; alignment is checked by the
    /// normalizer.
    pub(crate) fn into_payload(self) -> Result<RawForecastPayload, WeatherError> {
        let current = self.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;
        let daily = self.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        let dates = daily
            .time
            .iter()
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|e| WeatherError::ParseError(format!("Invalid date {d}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RawForecastPayload {
            current: RawCurrent {
                temperature: current.temperature_2m,
                apparent_temperature: current.apparent_temperature,
                humidity: current.relative_humidity_2m,
                weather_code: current.weather_code,
                wind_speed_kmh: current.wind_speed_10m,
            },
            daily: RawDailySeries {
                dates,
                max_temps: daily.temperature_2m_max,
                min_temps: daily.temperature_2m_min,
                weather_codes: daily.weather_code,
            },
        })
    }
}

/// Geocoding endpoint response; `results` is omitted when nothing matches
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}
