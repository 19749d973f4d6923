//! Train station near a coordinate

use serde::{Deserialize, Serialize};

use crate::value_objects::PlaceId;

/// A station returned by a nearest-station lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Upstream place identifier
    pub place_id: PlaceId,
    /// Station name
    pub name: String,
    /// Short address ("vicinity") of the station
    pub address: Option<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Great-circle distance from the queried point, in meters
    pub distance_meters: u32,
}
