//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod place_search_port;

#[cfg(test)]
pub use place_search_port::MockPlaceSearchPort;
pub use place_search_port::{
    AddressComponent, LatLng, NearbyPlace, PlaceCandidate, PlaceDetails, PlaceSearchPort,
};
