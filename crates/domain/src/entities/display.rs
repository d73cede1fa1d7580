//! Display-ready weather model
//!
//! Values are kept unrounded; the `rounded_*` helpers round once, at the point
//! of presentation.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::place::ResolvedPlace;
use crate::chart::WeekChart;
use crate::classifier::{Classification, IconCategory};
use crate::value_objects::{Humidity, WindSpeed};

/// Round to the nearest integer with halves going up (2.5 -> 3, -2.5 -> -2)
#[must_use]
pub fn round_for_display(value: f64) -> i64 {
    // Halves go up, values a hair below a half stay down
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Current readings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentReadings {
    /// Air temperature in Celsius
    pub temp_c: f64,
    /// Feels-like temperature in Celsius
    pub feels_like_c: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed (km/h is the stored unit)
    pub wind_speed: WindSpeed,
}

impl CurrentReadings {
    #[must_use]
    pub fn rounded_temp(&self) -> i64 {
        round_for_display(self.temp_c)
    }

    #[must_use]
    pub fn rounded_feels_like(&self) -> i64 {
        round_for_display(self.feels_like_c)
    }
}

/// One day of the weekly forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub icon: IconCategory,
}

impl DayForecast {
    #[must_use]
    pub fn rounded_max(&self) -> i64 {
        round_for_display(self.max_temp_c)
    }

    #[must_use]
    pub fn rounded_min(&self) -> i64 {
        round_for_display(self.min_temp_c)
    }

    /// Short weekday name (pt), capitalised
    #[must_use]
    pub fn weekday_label(&self) -> &'static str {
        match self.date.weekday() {
            Weekday::Mon => "Seg",
            Weekday::Tue => "Ter",
            Weekday::Wed => "Qua",
            Weekday::Thu => "Qui",
            Weekday::Fri => "Sex",
            Weekday::Sat => "Sáb",
            Weekday::Sun => "Dom",
        }
    }
}

/// Normalized result of one completed search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayWeather {
    /// Place the forecast is for
    pub place: ResolvedPlace,
    /// Current readings
    pub current: CurrentReadings,
    /// Classification of the current weather code
    pub condition: Classification,
    /// Exactly seven days, ascending, index 0 is today
    pub week: Vec<DayForecast>,
    /// Bar heights for the week chart, index-aligned with `week`
    pub chart: WeekChart,
}

impl DisplayWeather {
    /// Current description with its first letter upper-cased
    #[must_use]
    pub fn headline(&self) -> String {
        let mut chars = self.condition.description.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}
