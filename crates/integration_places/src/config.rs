//! Places service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the Google Places client
#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Base URL of the Places web service (without trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    pub api_key: String,

    /// Response language
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_language() -> String {
    "ja".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl PlacesConfig {
    /// Create a configuration with defaults and the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            language: default_language(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: 5,
            ..Self::new("test-key")
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = PlacesConfig::new("key");
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api/place");
        assert_eq!(config.language, "ja");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_testing_config_strips_trailing_slash() {
        let config = PlacesConfig::for_testing("http://127.0.0.1:1234/");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_validation_empty_key() {
        let config = PlacesConfig::new("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = PlacesConfig {
            base_url: String::new(),
            ..PlacesConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = PlacesConfig {
            timeout_secs: 0,
            ..PlacesConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = PlacesConfig::new("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PlacesConfig = serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
        assert_eq!(config.language, "ja");
        assert_eq!(config.timeout_secs, 10);
    }
}
