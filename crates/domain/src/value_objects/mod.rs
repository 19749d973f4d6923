//! Value Objects - Immutable, identity-less domain primitives

mod address_tag;
mod geo_location;
mod place_id;

pub use address_tag::AddressTag;
pub use geo_location::GeoLocation;
pub use place_id::PlaceId;
