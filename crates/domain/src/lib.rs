//! Domain layer for Tempo
//!
//! Contains the weather-code classifier, the forecast normalizer and the
//! week-chart scaling math, plus the value objects and entities they produce.
//! Everything here is pure: no I/O, no shared state, safe to call from any thread.

pub mod chart;
pub mod classifier;
pub mod entities;
pub mod errors;
pub mod normalizer;
pub mod value_objects;

pub use chart::{BarHeights, WeekChart};
pub use classifier::{Classification, IconCategory, classify, description_for, icon_for};
pub use entities::*;
pub use errors::DomainError;
pub use normalizer::{WEEK_LENGTH, normalize};
pub use value_objects::*;
