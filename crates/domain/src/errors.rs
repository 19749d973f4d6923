//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was missing or empty
    #[error("Missing value: {0}")]
    MissingValue(String),

    /// Coordinates outside the WGS84 range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a missing value error for the named field
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingValue(field.into())
    }
}
