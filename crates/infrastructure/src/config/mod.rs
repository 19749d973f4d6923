//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `places`: Places API and station lookup settings

mod places;
mod server;

use application::CafeSearchSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use places::{PlacesAppConfig, StationsAppConfig};
pub use server::ServerConfig;

/// Prefix of the environment variables read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "CAFETALE";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Places API configuration
    #[serde(default)]
    pub places: PlacesAppConfig,

    /// Nearest-station lookup configuration
    #[serde(default)]
    pub stations: StationsAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    ///
    /// Precedence, lowest first: built-in defaults, the legacy `PORT` and
    /// `GOOGLE_API_KEY` variables, `config.toml`, then `CAFETALE__*`
    /// variables (e.g. `CAFETALE__PLACES__API_KEY`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?;

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_default("server.port", port)?;
        }
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            builder = builder.set_default("places.api_key", key)?;
        }

        let config = builder
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., CAFETALE__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        debug!(config = ?app_config, "Configuration loaded");
        Ok(app_config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.places.validate()?;
        self.stations.validate()
    }

    /// Settings for the café service
    #[must_use]
    pub fn search_settings(&self) -> CafeSearchSettings {
        places::search_settings(&self.places, &self.stations)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            places: PlacesAppConfig {
                api_key: Some(SecretString::from("key")),
                ..PlacesAppConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.base_path, "/api");
        assert_eq!(config.places.max_results, 5);
        assert_eq!(config.stations.radius_meters, 1000);
        assert_eq!(config.stations.place_type, "train_station");
    }

    #[test]
    fn validate_requires_api_key() {
        let err = AppConfig::default().validate().unwrap_err();
        assert!(err.contains("api_key"));
    }

    #[test]
    fn validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_station_radius() {
        let mut config = valid_config();
        config.stations.radius_meters = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserialize_partial_toml_like_source() {
        let config: AppConfig = config::Config::builder()
            .set_override("server.port", 8080)
            .unwrap()
            .set_override("places.api_key", "from-file")
            .unwrap()
            .set_override("stations.max_results", 3)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.stations.max_results, 3);
        assert_eq!(config.stations.radius_meters, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_redacts_api_key() {
        let debug = format!("{:?}", valid_config());
        assert!(!debug.contains("\"key\""));
        assert!(debug.contains("REDACTED"));
    }
}
