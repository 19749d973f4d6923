//! Places API and station lookup configuration.

use application::CafeSearchSettings;
use integration_places::PlacesConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Places Configuration
// ==============================

/// Places API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesAppConfig {
    /// Places API base URL
    #[serde(default = "default_places_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Response language
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_places_timeout")]
    pub timeout_secs: u64,

    /// Café candidates returned when a request gives no ceiling
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_places_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_language() -> String {
    "ja".to_string()
}

const fn default_places_timeout() -> u64 {
    10
}

const fn default_max_results() -> usize {
    5
}

impl Default for PlacesAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_places_base_url(),
            api_key: None,
            language: default_language(),
            timeout_secs: default_places_timeout(),
            max_results: default_max_results(),
        }
    }
}

impl PlacesAppConfig {
    /// Validate the Places settings
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .api_key
            .as_ref()
            .is_none_or(|k| k.expose_secret().trim().is_empty())
        {
            return Err(
                "places.api_key is required (set CAFETALE__PLACES__API_KEY or GOOGLE_API_KEY)"
                    .to_string(),
            );
        }
        if self.base_url.trim().is_empty() {
            return Err("places.base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("places.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_places_config(&self) -> PlacesConfig {
        PlacesConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string())
                .unwrap_or_default(),
            language: self.language.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Stations Configuration
// ==============================

/// Nearest-station lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsAppConfig {
    /// Search radius in meters
    #[serde(default = "default_station_radius")]
    pub radius_meters: u32,

    /// Stations returned when a request gives no ceiling
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Upstream place type for stations
    #[serde(default = "default_station_type")]
    pub place_type: String,
}

const fn default_station_radius() -> u32 {
    1000
}

fn default_station_type() -> String {
    "train_station".to_string()
}

impl Default for StationsAppConfig {
    fn default() -> Self {
        Self {
            radius_meters: default_station_radius(),
            max_results: default_max_results(),
            place_type: default_station_type(),
        }
    }
}

impl StationsAppConfig {
    /// Validate the station settings
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.radius_meters == 0 {
            return Err("stations.radius_meters must be greater than 0".to_string());
        }
        if self.max_results == 0 {
            return Err("stations.max_results must be greater than 0".to_string());
        }
        if self.place_type.trim().is_empty() {
            return Err("stations.place_type must not be empty".to_string());
        }
        Ok(())
    }
}

/// Build the café service settings from the loaded configuration
pub(super) fn search_settings(
    places: &PlacesAppConfig,
    stations: &StationsAppConfig,
) -> CafeSearchSettings {
    CafeSearchSettings {
        default_max_results: places.max_results,
        station_radius_meters: stations.radius_meters,
        station_max_results: stations.max_results,
        station_place_type: stations.place_type.clone(),
    }
}
