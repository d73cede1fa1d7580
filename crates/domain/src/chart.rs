//! Week chart scaling
//!
//! Turns the seven daily max/min temperatures into bar heights for a small
//! min/max chart. Heights are linear between [`MIN_BAR_HEIGHT`] and
//! [`MAX_BAR_HEIGHT`], measured from the coldest minimum of the week.

use serde::Serialize;

/// Height of the tallest possible bar
pub const MAX_BAR_HEIGHT: f64 = 80.0;

/// Height of a bar sitting exactly at the week's coldest minimum
pub const MIN_BAR_HEIGHT: f64 = 8.0;

/// Smallest height a min-temperature bar is ever drawn with
pub const MIN_TEMP_BAR_FLOOR: f64 = 4.0;

/// Range substituted when every day has the same temperature
pub const FALLBACK_RANGE: f64 = 10.0;

/// Bar heights for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarHeights {
    /// Height of the max-temperature bar, never below [`MIN_BAR_HEIGHT`]
    pub max: f64,
    /// Height of the min-temperature bar, never below [`MIN_TEMP_BAR_FLOOR`]
    pub min: f64,
}

/// Scaled chart for a whole week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekChart {
    /// Coldest minimum of the week (the chart baseline)
    pub floor_c: f64,
    /// Range the heights were scaled against
    pub range_c: f64,
    /// One entry per day, index-aligned with the input
    pub bars: Vec<BarHeights>,
}

impl WeekChart {
    /// Scale index-aligned max/min series into bar heights
    ///
    /// Only the overlapping prefix of the two slices is charted; callers are
    /// expected to have validated alignment already.
    #[must_use]
    pub fn scale(max_temps: &[f64], min_temps: &[f64]) -> Self {
        let ceiling = max_temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let floor = min_temps.iter().copied().fold(f64::INFINITY, f64::min);

        let range = ceiling - floor;
        // Also covers empty input and reversed data, where the range is not positive
        let range = if range > 0.0 && range.is_finite() {
            range
        } else {
            FALLBACK_RANGE
        };

        let height = |value: f64| {
            ((value - floor) / range).mul_add(MAX_BAR_HEIGHT - MIN_BAR_HEIGHT, MIN_BAR_HEIGHT)
        };

        let bars = max_temps
            .iter()
            .zip(min_temps)
            .map(|(&max, &min)| BarHeights {
                max: height(max).max(MIN_BAR_HEIGHT),
                min: height(min).max(MIN_TEMP_BAR_FLOOR),
            })
            .collect();

        Self {
            floor_c: if floor.is_finite() { floor } else { 0.0 },
            range_c: range,
            bars,
        }
    }
}
