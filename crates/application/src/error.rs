//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Some variants declare an HTTP status and a kind name; the presentation
/// layer uses them verbatim and falls back to 500 / `InternalServerError`.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No café matched the search
    #[error("{0}")]
    NotFound(String),

    /// The upstream Places service failed or rejected the request
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Place details could not be used to build a result
    #[error("Place details unavailable: {0}")]
    DetailUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Build the "no café found" error for a query
    pub fn cafe_not_found(query: &str) -> Self {
        Self::NotFound(format!("No cafe found for query: {query}"))
    }

    /// HTTP status declared by this error, if any
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Domain(_) => Some(400),
            _ => None,
        }
    }

    /// Error kind name exposed to clients, if any
    pub const fn kind(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => Some("NotFoundError"),
            Self::Domain(_) => Some("ValidationError"),
            Self::Upstream(_) => Some("UpstreamError"),
            Self::DetailUnavailable(_) => Some("DetailUnavailableError"),
            Self::Configuration(_) | Self::Internal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_declares_404() {
        let err = ApplicationError::cafe_not_found("スターバックス 渋谷");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.kind(), Some("NotFoundError"));
        assert!(err.to_string().contains("スターバックス 渋谷"));
    }

    #[test]
    fn upstream_has_kind_but_no_status() {
        let err = ApplicationError::Upstream("HTTP 500".to_string());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.kind(), Some("UpstreamError"));
    }

    #[test]
    fn detail_unavailable_kind() {
        let err = ApplicationError::DetailUnavailable("X1".to_string());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.kind(), Some("DetailUnavailableError"));
    }

    #[test]
    fn internal_declares_nothing() {
        let err = ApplicationError::Internal("boom".to_string());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.kind(), None);
        let err = ApplicationError::Configuration("missing key".to_string());
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn domain_error_is_validation() {
        let err: ApplicationError = DomainError::InvalidCoordinates.into();
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.kind(), Some("ValidationError"));
    }
}
