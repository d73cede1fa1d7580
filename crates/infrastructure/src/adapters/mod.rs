//! Adapters - Implementations of application ports

mod forecast_adapter;
mod geocoding_adapter;

pub use forecast_adapter::ForecastAdapter;
pub use geocoding_adapter::GeocodingAdapter;
