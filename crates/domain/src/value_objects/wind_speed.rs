//! Wind speed value object
//!
//! Upstream reports wind in km/h. That figure is stored as-is and only rounded
//! when displayed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wind speed, stored in kilometres per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindSpeed(f64);

impl WindSpeed {
    /// Wrap a speed reported in km/h
    #[must_use]
    pub const fn from_kmh(kmh: f64) -> Self {
        Self(kmh)
    }

    /// Speed in km/h, unrounded
    #[must_use]
    pub const fn kmh(self) -> f64 {
        self.0
    }

    /// Speed in km/h rounded for display
    #[must_use]
    pub fn rounded_kmh(self) -> i64 {
        crate::entities::round_for_display(self.0)
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.rounded_kmh())
    }
}
