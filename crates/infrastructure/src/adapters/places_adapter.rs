//! Places adapter - Implements PlaceSearchPort using integration_places

use application::error::ApplicationError;
use application::ports::{
    AddressComponent, LatLng, NearbyPlace, PlaceCandidate, PlaceDetails, PlaceSearchPort,
};
use async_trait::async_trait;
use domain::DomainError;
use domain::value_objects::{GeoLocation, PlaceId};
use integration_places::{
    GooglePlacesClient, LatLng as PlacesLatLng, NearbyResult, PlaceDetails as PlacesDetails,
    PlacesClient, PlacesConfig, PlacesError, TextSearchResult,
};
use tracing::{debug, instrument, warn};

/// Adapter for the Google Places web service
pub struct GooglePlacesAdapter {
    client: Box<dyn PlacesClient>,
}

impl std::fmt::Debug for GooglePlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GooglePlacesAdapter")
            .field("client", &"PlacesClient")
            .finish()
    }
}

impl GooglePlacesAdapter {
    /// Create a new adapter backed by `GooglePlacesClient`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &PlacesConfig) -> Result<Self, ApplicationError> {
        let client = GooglePlacesClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(client))
    }

    /// Create an adapter around any Places client
    pub fn with_client(client: impl PlacesClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Convert integration error to application error
    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            PlacesError::DetailUnavailable { place_id } => ApplicationError::DetailUnavailable(
                format!("Place details returned no result for {place_id}"),
            ),
            PlacesError::InvalidRequest(e) => DomainError::ValidationError(e).into(),
            PlacesError::ConfigurationError(e) => ApplicationError::Configuration(e),
            err @ (PlacesError::ConnectionFailed(_)
            | PlacesError::RequestFailed(_)
            | PlacesError::ParseError(_)
            | PlacesError::ApiStatus { .. }
            | PlacesError::Timeout { .. }) => ApplicationError::Upstream(err.to_string()),
        }
    }

    fn map_location(location: PlacesLatLng) -> LatLng {
        LatLng {
            lat: location.lat,
            lng: location.lng,
        }
    }

    /// Convert a text search hit, dropping entries without an identifier
    fn map_candidate(result: TextSearchResult) -> Option<PlaceCandidate> {
        match PlaceId::new(result.place_id) {
            Ok(place_id) => Some(PlaceCandidate {
                place_id,
                name: result.name,
            }),
            Err(_) => {
                warn!("Skipping text search result without place_id");
                None
            },
        }
    }

    fn map_details(details: PlacesDetails) -> PlaceDetails {
        PlaceDetails {
            location: details.location().map(Self::map_location),
            name: details.name,
            formatted_address: details.formatted_address,
            address_components: details
                .address_components
                .into_iter()
                .map(|c| AddressComponent {
                    long_name: c.long_name,
                    types: c.types,
                })
                .collect(),
        }
    }

    fn map_nearby(result: NearbyResult) -> Option<NearbyPlace> {
        let location = result.location().map(Self::map_location);
        match PlaceId::new(result.place_id) {
            Ok(place_id) => Some(NearbyPlace {
                place_id,
                name: result.name,
                vicinity: result.vicinity,
                location,
            }),
            Err(_) => {
                warn!("Skipping nearby result without place_id");
                None
            },
        }
    }
}

#[async_trait]
impl PlaceSearchPort for GooglePlacesAdapter {
    #[instrument(skip(self))]
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, ApplicationError> {
        let results = self
            .client
            .text_search(query)
            .await
            .map_err(Self::map_error)?;

        debug!(count = results.len(), "Text search completed");
        Ok(results.into_iter().filter_map(Self::map_candidate).collect())
    }

    #[instrument(skip(self, place_id), fields(place_id = %place_id))]
    async fn place_details(&self, place_id: &PlaceId) -> Result<PlaceDetails, ApplicationError> {
        let details = self
            .client
            .place_details(place_id.as_str())
            .await
            .map_err(Self::map_error)?;

        Ok(Self::map_details(details))
    }

    #[instrument(skip(self))]
    async fn nearby_search(
        &self,
        location: &GeoLocation,
        radius_meters: u32,
        place_type: &str,
    ) -> Result<Vec<NearbyPlace>, ApplicationError> {
        let results = self
            .client
            .nearby_search(
                location.latitude(),
                location.longitude(),
                radius_meters,
                place_type,
            )
            .await
            .map_err(Self::map_error)?;

        debug!(count = results.len(), "Nearby search completed");
        Ok(results.into_iter().filter_map(Self::map_nearby).collect())
    }
}
