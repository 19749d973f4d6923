//! Opaque upstream place identifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a place in the upstream Places service
///
/// The value is opaque; the only invariant is that it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    /// Create a place ID, rejecting blank values
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::missing("place id"));
        }
        Ok(Self(value))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_id_keeps_value() {
        let id = PlaceId::new("ChIJR4fczVeLGGARWVp2HGalka0").unwrap();
        assert_eq!(id.as_str(), "ChIJR4fczVeLGGARWVp2HGalka0");
        assert_eq!(id.to_string(), "ChIJR4fczVeLGGARWVp2HGalka0");
    }

    #[test]
    fn blank_place_id_rejected() {
        assert!(PlaceId::new("").is_err());
        assert!(PlaceId::new("   ").is_err());
    }

    #[test]
    fn place_id_serializes_as_plain_string() {
        let id = PlaceId::new("X1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""X1""#);
    }
}
