//! Café search handler

use axum::{Json, extract::State};
use domain::entities::CafeCandidate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::{Validate, ValidationError};

use super::SuccessResponse;
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Largest `maxResults` a client may ask for
pub const MAX_RESULTS_LIMIT: usize = 20;

/// Request body for a café search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CafeSearchRequest {
    /// Free-text café name
    #[validate(
        length(max = 200, message = "must be at most 200 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    /// Maximum number of candidates (0-20)
    #[validate(range(max = 20, message = "must be between 0 and 20"))]
    #[serde(default)]
    pub max_results: Option<usize>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Resolve a café name into normalized candidates
#[instrument(skip_all)]
pub async fn search_cafes(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CafeSearchRequest>,
) -> Result<Json<SuccessResponse<Vec<CafeCandidate>>>, ApiError> {
    info!(name = %request.name, max_results = ?request.max_results, "Cafe search");

    let cafes = state
        .cafe_service
        .resolve_cafe_candidates(&request.name, request.max_results)
        .await?;

    Ok(Json(SuccessResponse::new(cafes)))
}
