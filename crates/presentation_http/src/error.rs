//! API error handling
//!
//! `ApiError` is the single place where failures become HTTP responses.
//! Every error body has the shape `{ "error": <kind>, "message": <text> }`.

use std::any::Any;

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Kind reported for failures that declare none
pub const DEFAULT_ERROR_KIND: &str = "InternalServerError";

/// Message reported for failures without one
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure raised by a use case
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Request body missing, malformed or out of range
    #[error("{0}")]
    Validation(String),

    /// No route matched the request
    #[error("{0}")]
    RouteNotFound(String),

    /// Unexpected failure inside the server
    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error kind name
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// HTTP status declared by the error, if any
    pub const fn declared_status(&self) -> Option<u16> {
        match self {
            Self::Application(e) => e.status_code(),
            Self::Validation(_) => Some(400),
            Self::RouteNotFound(_) => Some(404),
            Self::Internal(_) => None,
        }
    }

    /// Kind name declared by the error, if any
    pub const fn declared_kind(&self) -> Option<&'static str> {
        match self {
            Self::Application(e) => e.kind(),
            Self::Validation(_) => Some("ValidationError"),
            Self::RouteNotFound(_) => Some("NotFoundError"),
            Self::Internal(_) => None,
        }
    }

    /// Response status, falling back to 500
    pub fn status(&self) -> StatusCode {
        self.declared_status()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Response body, falling back to the default kind and message
    pub fn body(&self) -> ErrorResponse {
        let message = self.to_string();
        ErrorResponse {
            error: self.declared_kind().unwrap_or(DEFAULT_ERROR_KIND).to_string(),
            message: if message.trim().is_empty() {
                DEFAULT_ERROR_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Turn a caught handler panic into a response
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Handler panicked");

    ApiError::Internal(String::new()).into_response()
}
