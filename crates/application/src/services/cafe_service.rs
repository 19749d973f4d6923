//! Café search service
//!
//! Resolves a free-text café name into normalized candidates and a
//! coordinate into the nearest train stations.

use std::sync::Arc;

use domain::entities::{CafeCandidate, CafeSearchQuery, Station};
use domain::value_objects::{AddressTag, GeoLocation};
use futures::future::try_join_all;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{NearbyPlace, PlaceCandidate, PlaceDetails, PlaceSearchPort};

/// Limits and lookup parameters for the café service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeSearchSettings {
    /// Candidates returned when the request gives no ceiling
    pub default_max_results: usize,
    /// Radius of the nearby station search
    pub station_radius_meters: u32,
    /// Stations returned when the request gives no ceiling
    pub station_max_results: usize,
    /// Upstream place type used for stations
    pub station_place_type: String,
}

impl Default for CafeSearchSettings {
    fn default() -> Self {
        Self {
            default_max_results: 5,
            station_radius_meters: 1000,
            station_max_results: 5,
            station_place_type: "train_station".to_string(),
        }
    }
}

/// Service for café and station lookups
pub struct CafeService {
    places: Arc<dyn PlaceSearchPort>,
    settings: CafeSearchSettings,
}

impl std::fmt::Debug for CafeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CafeService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CafeService {
    /// Create a new café service
    pub fn new(places: Arc<dyn PlaceSearchPort>, settings: CafeSearchSettings) -> Self {
        Self { places, settings }
    }

    /// Get the service settings
    pub const fn settings(&self) -> &CafeSearchSettings {
        &self.settings
    }

    /// Resolve a café name into normalized candidates
    ///
    /// Candidates keep the upstream ranking order. Details are fetched
    /// concurrently; the first failure aborts the whole search.
    #[instrument(skip(self))]
    pub async fn resolve_cafe_candidates(
        &self,
        cafe_name: &str,
        max_results: Option<usize>,
    ) -> Result<Vec<CafeCandidate>, ApplicationError> {
        let query = CafeSearchQuery::new(
            cafe_name,
            max_results.unwrap_or(self.settings.default_max_results),
        )?;

        let mut candidates = self.places.text_search(query.cafe_name()).await?;
        candidates.truncate(query.max_results());

        if candidates.is_empty() {
            info!(query = %query.cafe_name(), "No cafe matched");
            return Err(ApplicationError::cafe_not_found(query.cafe_name()));
        }

        debug!(count = candidates.len(), "Fetching place details");

        let cafes = try_join_all(candidates.iter().map(|candidate| async move {
            self.places
                .place_details(&candidate.place_id)
                .await
                .and_then(|details| normalize_cafe(candidate, details))
        }))
        .await?;

        info!(count = cafes.len(), "Resolved cafe candidates");
        Ok(cafes)
    }

    /// Resolve the stations nearest to a location
    ///
    /// Stations are ordered by distance, nearest first. An area without
    /// stations yields an empty list.
    #[instrument(skip(self))]
    pub async fn resolve_nearest_stations(
        &self,
        location: GeoLocation,
        max: Option<usize>,
    ) -> Result<Vec<Station>, ApplicationError> {
        let places = self
            .places
            .nearby_search(
                &location,
                self.settings.station_radius_meters,
                &self.settings.station_place_type,
            )
            .await?;

        let mut stations: Vec<Station> = places
            .into_iter()
            .filter_map(|place| to_station(&location, place))
            .collect();

        stations.sort_by_key(|s| s.distance_meters);
        stations.truncate(max.unwrap_or(self.settings.station_max_results));

        info!(count = stations.len(), "Resolved nearest stations");
        Ok(stations)
    }
}

/// Build a café record from a search hit and its details
fn normalize_cafe(
    candidate: &PlaceCandidate,
    details: PlaceDetails,
) -> Result<CafeCandidate, ApplicationError> {
    let location = details
        .location
        .and_then(|loc| GeoLocation::new(loc.lat, loc.lng).ok())
        .ok_or_else(|| {
            warn!(place_id = %candidate.place_id, "Place details lack usable geometry");
            ApplicationError::DetailUnavailable(format!(
                "No usable geometry for place {}",
                candidate.place_id
            ))
        })?;

    let [prefecture, city, subcity] =
        AddressTag::ALL.map(|tag| details.component(tag).map(ToString::to_string));

    Ok(CafeCandidate {
        place_id: candidate.place_id.clone(),
        name: details.name.unwrap_or_default(),
        full_address: details.formatted_address.unwrap_or_default(),
        latitude: location.latitude(),
        longitude: location.longitude(),
        prefecture,
        city,
        subcity,
    })
}

fn to_station(origin: &GeoLocation, place: NearbyPlace) -> Option<Station> {
    let Some(location) = place
        .location
        .and_then(|loc| GeoLocation::new(loc.lat, loc.lng).ok())
    else {
        debug!(place_id = %place.place_id, "Skipping station without geometry");
        return None;
    };

    Some(Station {
        distance_meters: origin.distance_meters(&location),
        place_id: place.place_id,
        name: place.name.unwrap_or_default(),
        address: place.vicinity,
        latitude: location.latitude(),
        longitude: location.longitude(),
    })
}

#[cfg(test)]
mod tests {
    use domain::value_objects::PlaceId;

    use super::*;
    use crate::ports::{AddressComponent, LatLng, MockPlaceSearchPort};

    fn candidate(id: &str) -> PlaceCandidate {
        PlaceCandidate {
            place_id: PlaceId::new(id).unwrap(),
            name: Some(format!("Cafe {id}")),
        }
    }

    fn component(name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: name.to_string(),
            types: types.iter().map(ToString::to_string).collect(),
        }
    }

    fn details(name: &str) -> PlaceDetails {
        PlaceDetails {
            name: Some(name.to_string()),
            formatted_address: Some(format!("{name} address")),
            location: Some(LatLng {
                lat: 35.6,
                lng: 139.7,
            }),
            address_components: vec![
                component("渋谷区", &["locality", "political"]),
                component("東京都", &["administrative_area_level_1", "political"]),
            ],
        }
    }

    fn nearby(id: &str, lat: f64, lng: f64) -> NearbyPlace {
        NearbyPlace {
            place_id: PlaceId::new(id).unwrap(),
            name: Some(format!("{id}駅")),
            vicinity: None,
            location: Some(LatLng { lat, lng }),
        }
    }

    fn service(mock: MockPlaceSearchPort) -> CafeService {
        CafeService::new(Arc::new(mock), CafeSearchSettings::default())
    }

    #[tokio::test]
    async fn single_candidate_is_normalized() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .withf(|q| q == "Starbucks Shibuya")
            .returning(|_| Ok(vec![candidate("X1")]));
        mock.expect_place_details()
            .returning(|_| Ok(details("Starbucks Shibuya")));

        let cafes = service(mock)
            .resolve_cafe_candidates("  Starbucks Shibuya ", None)
            .await
            .unwrap();

        assert_eq!(cafes.len(), 1);
        let cafe = &cafes[0];
        assert_eq!(cafe.place_id.as_str(), "X1");
        assert_eq!(cafe.name, "Starbucks Shibuya");
        assert_eq!(cafe.full_address, "Starbucks Shibuya address");
        assert_eq!(cafe.prefecture.as_deref(), Some("東京都"));
        assert_eq!(cafe.city.as_deref(), Some("渋谷区"));
        assert_eq!(cafe.subcity, None);
    }

    #[tokio::test]
    async fn output_order_follows_search_order() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Ok(vec![candidate("A"), candidate("B"), candidate("C")]));
        mock.expect_place_details()
            .returning(|id| Ok(details(&format!("name-{id}"))));

        let cafes = service(mock)
            .resolve_cafe_candidates("cafe", None)
            .await
            .unwrap();

        let ids: Vec<&str> = cafes.iter().map(|c| c.place_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(cafes[1].name, "name-B");
    }

    #[tokio::test]
    async fn candidates_are_truncated_before_details() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search().returning(|_| {
            Ok((1..=7).map(|i| candidate(&format!("P{i}"))).collect())
        });
        mock.expect_place_details()
            .times(5)
            .returning(|_| Ok(details("cafe")));

        let cafes = service(mock)
            .resolve_cafe_candidates("cafe", None)
            .await
            .unwrap();

        assert_eq!(cafes.len(), 5);
        assert_eq!(cafes[4].place_id.as_str(), "P5");
    }

    #[tokio::test]
    async fn explicit_ceiling_overrides_default() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Ok(vec![candidate("A"), candidate("B"), candidate("C")]));
        mock.expect_place_details()
            .times(2)
            .returning(|_| Ok(details("cafe")));

        let cafes = service(mock)
            .resolve_cafe_candidates("cafe", Some(2))
            .await
            .unwrap();
        assert_eq!(cafes.len(), 2);
    }

    #[tokio::test]
    async fn empty_search_is_not_found() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search().returning(|_| Ok(vec![]));
        mock.expect_place_details().never();

        let err = service(mock)
            .resolve_cafe_candidates("存在しないカフェ", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound(_)));
        assert_eq!(err.status_code(), Some(404));
        assert!(err.to_string().contains("存在しないカフェ"));
    }

    #[tokio::test]
    async fn zero_ceiling_is_not_found() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Ok(vec![candidate("A")]));
        mock.expect_place_details().never();

        let err = service(mock)
            .resolve_cafe_candidates("cafe", Some(0))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_upstream_call() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search().never();

        let err = service(mock)
            .resolve_cafe_candidates("   ", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[tokio::test]
    async fn search_failure_propagates() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Err(ApplicationError::Upstream("REQUEST_DENIED".to_string())));

        let err = service(mock)
            .resolve_cafe_candidates("cafe", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Upstream(_)));
    }

    #[tokio::test]
    async fn one_detail_failure_fails_the_search() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Ok(vec![candidate("A"), candidate("B"), candidate("C")]));
        mock.expect_place_details().returning(|id| {
            if id.as_str() == "B" {
                Err(ApplicationError::Upstream("HTTP 500".to_string()))
            } else {
                Ok(details("cafe"))
            }
        });

        let err = service(mock)
            .resolve_cafe_candidates("cafe", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Upstream(_)));
    }

    #[tokio::test]
    async fn missing_geometry_is_detail_unavailable() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Ok(vec![candidate("A")]));
        mock.expect_place_details().returning(|_| {
            Ok(PlaceDetails {
                location: None,
                ..details("cafe")
            })
        });

        let err = service(mock)
            .resolve_cafe_candidates("cafe", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::DetailUnavailable(_)));
        assert_eq!(err.kind(), Some("DetailUnavailableError"));
    }

    #[tokio::test]
    async fn non_finite_coordinates_are_detail_unavailable() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Ok(vec![candidate("A")]));
        mock.expect_place_details().returning(|_| {
            Ok(PlaceDetails {
                location: Some(LatLng {
                    lat: f64::NAN,
                    lng: 139.7,
                }),
                ..details("cafe")
            })
        });

        let err = service(mock)
            .resolve_cafe_candidates("cafe", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::DetailUnavailable(_)));
    }

    #[tokio::test]
    async fn address_fields_are_extracted_independently() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_text_search()
            .returning(|_| Ok(vec![candidate("A")]));
        mock.expect_place_details().returning(|_| {
            Ok(PlaceDetails {
                name: None,
                formatted_address: None,
                address_components: vec![component(
                    "道玄坂",
                    &["political", "sublocality", "sublocality_level_2"],
                )],
                ..details("cafe")
            })
        });

        let cafes = service(mock)
            .resolve_cafe_candidates("cafe", None)
            .await
            .unwrap();

        let cafe = &cafes[0];
        assert_eq!(cafe.prefecture, None);
        assert_eq!(cafe.city, None);
        assert_eq!(cafe.subcity.as_deref(), Some("道玄坂"));
        assert_eq!(cafe.name, "");
        assert_eq!(cafe.full_address, "");
    }

    #[tokio::test]
    async fn stations_sorted_by_distance_and_truncated() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_nearby_search()
            .withf(|_, radius, place_type| *radius == 1000 && place_type == "train_station")
            .returning(|_, _, _| {
                Ok(vec![
                    nearby("Far", 35.67, 139.70),
                    nearby("Near", 35.601, 139.70),
                    nearby("Mid", 35.61, 139.70),
                ])
            });

        let origin = GeoLocation::new(35.6, 139.7).unwrap();
        let stations = service(mock)
            .resolve_nearest_stations(origin, Some(2))
            .await
            .unwrap();

        let ids: Vec<&str> = stations.iter().map(|s| s.place_id.as_str()).collect();
        assert_eq!(ids, vec!["Near", "Mid"]);
        assert!(stations[0].distance_meters < stations[1].distance_meters);
        assert_eq!(stations[0].name, "Near駅");
    }

    #[tokio::test]
    async fn stations_without_geometry_are_skipped() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_nearby_search().returning(|_, _, _| {
            Ok(vec![
                NearbyPlace {
                    location: None,
                    ..nearby("NoGeo", 0.0, 0.0)
                },
                nearby("Shibuya", 35.658, 139.7016),
            ])
        });

        let origin = GeoLocation::new(35.6595, 139.7005).unwrap();
        let stations = service(mock)
            .resolve_nearest_stations(origin, None)
            .await
            .unwrap();

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].place_id.as_str(), "Shibuya");
    }

    #[tokio::test]
    async fn no_stations_nearby_is_empty() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_nearby_search().returning(|_, _, _| Ok(vec![]));

        let origin = GeoLocation::new(0.0, 0.0).unwrap();
        let stations = service(mock)
            .resolve_nearest_stations(origin, None)
            .await
            .unwrap();
        assert!(stations.is_empty());
    }

    #[tokio::test]
    async fn station_search_failure_propagates() {
        let mut mock = MockPlaceSearchPort::new();
        mock.expect_nearby_search()
            .returning(|_, _, _| Err(ApplicationError::Upstream("OVER_QUERY_LIMIT".to_string())));

        let origin = GeoLocation::new(35.6, 139.7).unwrap();
        let err = service(mock)
            .resolve_nearest_stations(origin, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Upstream(_)));
    }
}
