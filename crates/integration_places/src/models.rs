//! Places API data models
//!
//! Typed representations of the Text Search, Place Details and Nearby Search
//! JSON responses. Only the fields Cafetale reads are modelled; everything
//! else in the payload is ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of the `status` field of every Places response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiStatus {
    /// Request succeeded
    Ok,
    /// Request succeeded but matched nothing
    ZeroResults,
    /// The referenced place does not exist
    NotFound,
    /// Missing or malformed parameters
    InvalidRequest,
    /// Quota exhausted
    OverQueryLimit,
    /// Key rejected or API not enabled
    RequestDenied,
    /// Transient server-side failure
    UnknownError,
    /// A status this client does not know about
    Other(String),
}

impl ApiStatus {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ApiStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "NOT_FOUND" => Self::NotFound,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Other(value),
        }
    }
}

impl From<ApiStatus> for String {
    fn from(value: ApiStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// Geometry block of a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Representative point of the place
    pub location: Option<LatLng>,
}

/// One tagged fragment of a formatted address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Full text of the component (e.g. "東京都")
    pub long_name: String,
    /// Abbreviated text of the component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Type tags (e.g. "administrative_area_level_1", "political")
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Whether this component is tagged with the given type
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// A Text Search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSearchResult {
    /// Opaque place identifier
    pub place_id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Formatted address
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Place Details payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Formatted address
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// Geometry; absent for malformed payloads
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Tagged address fragments
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

impl PlaceDetails {
    /// Coordinates from the nested geometry, if present
    #[must_use]
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

/// A Nearby Search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyResult {
    /// Opaque place identifier
    pub place_id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Short address
    #[serde(default)]
    pub vicinity: Option<String>,
    /// Geometry
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl NearbyResult {
    /// Coordinates from the nested geometry, if present
    #[must_use]
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

// --- Raw response envelopes ---

/// Envelope of list endpoints (Text Search, Nearby Search)
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub status: ApiStatus,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Envelope of the Place Details endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct DetailEnvelope {
    pub status: ApiStatus,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub error_message: Option<String>,
}
