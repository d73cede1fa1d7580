//! Resolved place

use serde::Serialize;

use crate::value_objects::GeoLocation;

/// Best geocoding match for one search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlace {
    /// Display name of the place
    pub name: String,
    /// Country as returned by the geocoder, if any
    pub country: Option<String>,
    /// Coordinates used for the forecast request
    pub location: GeoLocation,
}

impl ResolvedPlace {
    /// Create a new resolved place
    #[must_use]
    pub fn new(name: impl Into<String>, country: Option<String>, location: GeoLocation) -> Self {
        Self {
            name: name.into(),
            country,
            location,
        }
    }

    /// "name, country", or just the name when the country is unknown
    #[must_use]
    pub fn label(&self) -> String {
        match self.country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => format!("{}, {country}", self.name),
            None => self.name.clone(),
        }
    }
}
