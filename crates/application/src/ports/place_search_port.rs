//! Place search port
//!
//! Defines the interface for looking up places in an upstream Places
//! service. Adapters in the infrastructure layer implement this port.

use async_trait::async_trait;
use domain::value_objects::{AddressTag, GeoLocation, PlaceId};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A raw coordinate pair as returned upstream
///
/// Unvalidated; may be non-finite or out of range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// One entry of a text search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Upstream place identifier
    pub place_id: PlaceId,
    /// Name shown in the search result
    pub name: Option<String>,
}

/// A structured address component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Full text of the component
    pub long_name: String,
    /// Type tags, e.g. `locality`
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Check whether this component carries an address tag
    pub fn matches(&self, tag: AddressTag) -> bool {
        self.types.iter().any(|t| t == tag.upstream_type())
    }
}

/// Details of a single place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    /// Display name
    pub name: Option<String>,
    /// Formatted address
    pub formatted_address: Option<String>,
    /// Coordinates, if the place has geometry
    pub location: Option<LatLng>,
    /// Address components in upstream order
    pub address_components: Vec<AddressComponent>,
}

impl PlaceDetails {
    /// Long name of the first component carrying the tag
    ///
    /// An empty long name counts as absent.
    pub fn component(&self, tag: AddressTag) -> Option<&str> {
        self.address_components
            .iter()
            .find(|c| c.matches(tag))
            .map(|c| c.long_name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// One entry of a nearby search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    /// Upstream place identifier
    pub place_id: PlaceId,
    /// Place name
    pub name: Option<String>,
    /// Short address
    pub vicinity: Option<String>,
    /// Coordinates, if the place has geometry
    pub location: Option<LatLng>,
}

/// Port for upstream place lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceSearchPort: Send + Sync {
    /// Search places by free text, in upstream ranking order
    ///
    /// A search that matches nothing returns an empty list.
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, ApplicationError>;

    /// Fetch details of one place
    async fn place_details(&self, place_id: &PlaceId) -> Result<PlaceDetails, ApplicationError>;

    /// Search places of a type within a radius around a location
    async fn nearby_search(
        &self,
        location: &GeoLocation,
        radius_meters: u32,
        place_type: &str,
    ) -> Result<Vec<NearbyPlace>, ApplicationError>;
}
