//! Places error types

use thiserror::Error;

use crate::models::ApiStatus;

/// Errors that can occur during Places operations
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the Places service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status code
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the Places service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The response envelope carried a status other than the accepted ones
    #[error("Google Places API status: {status}{}", message_suffix(.message))]
    ApiStatus {
        /// Status reported by the API
        status: ApiStatus,
        /// `error_message` field, if the API sent one
        message: Option<String>,
    },

    /// Place details came back `OK` but without a result payload
    #[error("Place details unavailable (place_id: {place_id})")]
    DetailUnavailable {
        /// The place whose details were requested
        place_id: String,
    },

    /// The request could not be built from the given input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

impl PlacesError {
    /// Returns true if this error originates from the upstream service
    /// rather than from the caller's input or local configuration
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ParseError(_)
                | Self::ApiStatus { .. }
                | Self::DetailUnavailable { .. }
                | Self::Timeout { .. }
        )
    }
}
