//! Application configuration
//!
//! Layers, lowest precedence first: built-in defaults, an optional `tempo.toml`
//! (or an explicit file), then `TEMPO_*` environment variables with `__`
//! between nested keys, e.g. `TEMPO_FORECAST__TIMEOUT_SECS=5`.

use std::path::Path;

use integration_weather::{ForecastConfig, GeocodingConfig};
use serde::{Deserialize, Serialize};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tempo";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TEMPO";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Forecast API configuration
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Geocoding API configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `tempo.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(None, Self::environment())
    }

    /// Load configuration from an explicit file, which must exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load_with(Some(path), Self::environment())
    }

    /// Configuration with both APIs pointing at one mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            forecast: ForecastConfig::for_testing(base_url),
            geocoding: GeocodingConfig::for_testing(base_url),
        }
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
