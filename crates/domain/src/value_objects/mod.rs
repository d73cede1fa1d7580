//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod humidity;
mod wind_speed;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use humidity::{Humidity, InvalidHumidity};
pub use wind_speed::WindSpeed;
