//! Application layer - Use cases and orchestration
//!
//! Runs one city search end to end: trims the query, resolves it through the
//! [`LocationPort`], fetches the forecast through the [`ForecastPort`] and
//! normalizes the result. Adapters in the infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{SearchError, SearchErrorKind};
pub use ports::*;
pub use services::*;
