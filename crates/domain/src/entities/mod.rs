//! Domain entities - Per-search records with no lifecycle beyond one fetch

mod display;
mod forecast;
mod place;

pub use display::{CurrentReadings, DayForecast, DisplayWeather, round_for_display};
pub use forecast::{RawCurrent, RawDailySeries, RawForecastPayload};
pub use place::ResolvedPlace;
