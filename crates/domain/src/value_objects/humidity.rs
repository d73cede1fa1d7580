//! Relative humidity reading

use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("relative humidity of {0}% is above 100%")]
pub struct InvalidHumidity(pub u16);

/// Whole-percent relative humidity, 0 through 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Humidity(u8);

impl Humidity {
    pub fn new(percent: u16) -> Result<Self, InvalidHumidity> {
        match u8::try_from(percent) {
            Ok(value) if value <= 100 => Ok(Self(value)),
            _ => Err(InvalidHumidity(percent)),
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Humidity::new(0).unwrap().value(), 0);
        assert_eq!(Humidity::new(100).unwrap().value(), 100);
        assert_eq!(Humidity::new(101), Err(InvalidHumidity(101)));
        assert_eq!(Humidity::new(300), Err(InvalidHumidity(300)));
    }

    #[test]
    fn shows_percent_sign() {
        assert_eq!(Humidity::new(82).unwrap().to_string(), "82%");
        assert_eq!(
            InvalidHumidity(140).to_string(),
            "relative humidity of 140% is above 100%"
        );
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&Humidity::new(65).unwrap()).unwrap();
        assert_eq!(json, "65");
    }
}
