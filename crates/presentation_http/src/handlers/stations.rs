//! Nearest-station handler

use application::ApplicationError;
use axum::{Json, extract::State};
use domain::{entities::Station, value_objects::GeoLocation};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use super::SuccessResponse;
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Request body for a nearest-station lookup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StationSearchRequest {
    /// Latitude (-90 to 90)
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub lat: f64,

    /// Longitude (-180 to 180)
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub lng: f64,

    /// Maximum number of stations (1-20)
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    #[serde(default)]
    pub max: Option<usize>,
}

/// Resolve the stations nearest to a coordinate
#[instrument(skip_all)]
pub async fn search_stations(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<StationSearchRequest>,
) -> Result<Json<SuccessResponse<Vec<Station>>>, ApiError> {
    let location =
        GeoLocation::new(request.lat, request.lng).map_err(ApplicationError::from)?;
    info!(%location, max = ?request.max, "Station search");

    let stations = state
        .cafe_service
        .resolve_nearest_stations(location, request.max)
        .await?;

    Ok(Json(SuccessResponse::new(stations)))
}
