//! HTTP request handlers

use axum::http::{Method, Uri};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub mod cafes;
pub mod health;
pub mod stations;

/// Success envelope: `{ "status": "success", "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    /// Always `"success"`
    pub status: String,
    /// Response payload
    pub data: T,
}

impl<T> SuccessResponse<T> {
    /// Wrap a payload in the success envelope
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Fallback for requests that match no route
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("Route not found: {method} {}", uri.path()))
}
