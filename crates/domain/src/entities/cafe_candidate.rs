//! Normalized café record returned by a café search

use serde::{Deserialize, Serialize};

use crate::value_objects::PlaceId;

/// A café candidate with a flat, normalized address
///
/// Built fresh for every search response and discarded after it is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeCandidate {
    /// Upstream place identifier
    pub place_id: PlaceId,
    /// Display name
    pub name: String,
    /// Formatted address as returned upstream
    pub full_address: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Prefecture, if the upstream address had one
    pub prefecture: Option<String>,
    /// City or ward, if the upstream address had one
    pub city: Option<String>,
    /// District below the city, if the upstream address had one
    pub subcity: Option<String>,
}
