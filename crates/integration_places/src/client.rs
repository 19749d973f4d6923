//! Google Places client
//!
//! Provides text search, place details and nearby search using the
//! legacy JSON endpoints under `{base_url}/{endpoint}/json`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::{
    ApiStatus, DetailEnvelope, ListEnvelope, NearbyResult, PlaceDetails, TextSearchResult,
};

/// Fields requested from the Place Details endpoint
pub(crate) const DETAIL_FIELDS: &str = "formatted_address,geometry,address_components,name";

/// Trait for Places service clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Search places matching a free-text query, in upstream ranking order
    async fn text_search(&self, query: &str) -> Result<Vec<TextSearchResult>, PlacesError>;

    /// Fetch the details of a single place
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError>;

    /// Search places of a type within a radius around a coordinate
    async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
        place_type: &str,
    ) -> Result<Vec<NearbyResult>, PlacesError>;
}

/// Places client backed by the Google Maps web service
#[derive(Debug)]
pub struct GooglePlacesClient {
    client: Client,
    config: PlacesConfig,
}

impl GooglePlacesClient {
    /// Create a new Places client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("Cafetale/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Map a transport error, distinguishing timeouts
    fn map_transport_error(&self, e: reqwest::Error) -> PlacesError {
        if e.is_timeout() {
            warn!(timeout_secs = self.config.timeout_secs, "Places API request timed out");
            PlacesError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            // Strip the URL: it carries the API key
            let e = e.without_url();
            warn!(error = %e, "Places API connection failed");
            PlacesError::ConnectionFailed(e.to_string())
        }
    }

    /// GET `{base_url}/{endpoint}/json` and decode the body
    ///
    /// `language` and `key` are appended to every request. The URL logged
    /// here never contains the key.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}/{endpoint}/json", self.config.base_url);

        debug!(%url, "Calling Places API");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[
                ("language", self.config.language.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Places API returned HTTP error");
            return Err(PlacesError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(%url, error = %e, "Places API returned an undecodable body");
            PlacesError::ParseError(e.to_string())
        })
    }

    /// Unwrap a list envelope, accepting `OK` and any extra statuses given
    fn into_results<T>(
        envelope: ListEnvelope<T>,
        also_accept: &[ApiStatus],
    ) -> Result<Vec<T>, PlacesError> {
        if envelope.status == ApiStatus::Ok || also_accept.contains(&envelope.status) {
            return Ok(envelope.results);
        }

        warn!(status = %envelope.status, message = ?envelope.error_message, "Places API rejected request");
        Err(PlacesError::ApiStatus {
            status: envelope.status,
            message: envelope.error_message,
        })
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self))]
    async fn text_search(&self, query: &str) -> Result<Vec<TextSearchResult>, PlacesError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PlacesError::InvalidRequest(
                "Search query must not be empty".to_string(),
            ));
        }

        let envelope: ListEnvelope<TextSearchResult> = self
            .get_json("textsearch", &[("query", query.to_string())])
            .await?;

        let results = Self::into_results(envelope, &[])?;
        debug!(count = results.len(), "Text search results");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        if place_id.trim().is_empty() {
            return Err(PlacesError::InvalidRequest(
                "place_id must not be empty".to_string(),
            ));
        }

        let envelope: DetailEnvelope = self
            .get_json(
                "details",
                &[
                    ("place_id", place_id.to_string()),
                    ("fields", DETAIL_FIELDS.to_string()),
                ],
            )
            .await?;

        if envelope.status != ApiStatus::Ok {
            warn!(status = %envelope.status, message = ?envelope.error_message, "Place details rejected");
            return Err(PlacesError::ApiStatus {
                status: envelope.status,
                message: envelope.error_message,
            });
        }

        envelope.result.ok_or_else(|| {
            warn!("Place details returned OK without a result");
            PlacesError::DetailUnavailable {
                place_id: place_id.to_string(),
            }
        })
    }

    #[instrument(skip(self))]
    async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
        place_type: &str,
    ) -> Result<Vec<NearbyResult>, PlacesError> {
        if radius_meters == 0 {
            return Err(PlacesError::InvalidRequest(
                "radius must be greater than 0".to_string(),
            ));
        }

        let envelope: ListEnvelope<NearbyResult> = self
            .get_json(
                "nearbysearch",
                &[
                    ("location", format!("{latitude},{longitude}")),
                    ("radius", radius_meters.to_string()),
                    ("type", place_type.to_string()),
                ],
            )
            .await?;

        // No station in range is an answer, not a failure
        let results = Self::into_results(envelope, &[ApiStatus::ZeroResults])?;
        debug!(count = results.len(), "Nearby search results");
        Ok(results)
    }
}
