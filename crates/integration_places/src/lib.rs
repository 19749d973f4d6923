//! Google Places integration for Cafetale
//!
//! Provides café lookup via the
//! [Places API](https://developers.google.com/maps/documentation/places/web-service)
//! legacy JSON endpoints: Text Search, Place Details and Nearby Search.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`PlacesClient`] defines the interface, implemented by [`GooglePlacesClient`].
//! Every response carries an upstream `status` field; anything other than `OK`
//! (and `ZERO_RESULTS` for nearby search) is surfaced as [`PlacesError::ApiStatus`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{GooglePlacesClient, PlacesClient, PlacesConfig};
//!
//! let config = PlacesConfig::new("my-api-key");
//! let client = GooglePlacesClient::new(&config)?;
//!
//! let candidates = client.text_search("スターバックス 渋谷").await?;
//! let details = client.place_details(&candidates[0].place_id).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GooglePlacesClient, PlacesClient};
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use models::{
    AddressComponent, ApiStatus, Geometry, LatLng, NearbyResult, PlaceDetails, TextSearchResult,
};
