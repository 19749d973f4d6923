//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix the API routes are mounted under ("" mounts at the root)
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Directory for `combined.log` and `error.log` (unset = console only)
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Maximum body size for JSON requests in bytes (default: 64KB)
    #[serde(default = "default_max_body_size")]
    pub max_body_size_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_base_path() -> String {
    "/api".to_string()
}

const fn default_shutdown_timeout() -> u64 {
    30
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_max_body_size() -> usize {
    64 * 1024 // 64KB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            log_format: default_log_format(),
            log_dir: None,
            max_body_size_bytes: default_max_body_size(),
        }
    }
}

impl ServerConfig {
    /// Socket address string to bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the server settings
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(format!(
                "server.base_path must start with '/': {}",
                self.base_path
            ));
        }
        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(format!(
                "server.log_format must be 'text' or 'json': {}",
                self.log_format
            ));
        }
        if self.log_dir.as_deref().is_some_and(|dir| dir.trim().is_empty()) {
            return Err("server.log_dir must not be blank".to_string());
        }
        if self.max_body_size_bytes == 0 {
            return Err("server.max_body_size_bytes must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.shutdown_timeout_secs, 30);
        assert_eq!(config.max_body_size_bytes, 65536);
        assert!(config.allowed_origins.is_empty());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn validate_base_path() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());
        config.base_path = String::new();
        assert!(config.validate().is_ok());
        config.base_path = "api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_log_format() {
        let config = ServerConfig {
            log_format: "xml".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_log_dir() {
        let mut config = ServerConfig {
            log_dir: Some("logs".to_string()),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_ok());
        config.log_dir = Some("  ".to_string());
        assert!(config.validate().is_err());
    }
}
