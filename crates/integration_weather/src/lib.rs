//! Open-Meteo weather integration
//!
//! Clients for the Open-Meteo Forecast API and Geocoding API
//! (<https://open-meteo.com>). Neither requires an API key.

pub mod client;
pub mod geocoding;
mod models;

pub use client::{ForecastConfig, OpenMeteoClient, WeatherClient, WeatherError};
pub use geocoding::{GeocodingClient, GeocodingConfig, GeocodingError, OpenMeteoGeocodingClient};
