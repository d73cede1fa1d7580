//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the Open-Meteo clients and
//! loads the application configuration.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::AppConfig;
