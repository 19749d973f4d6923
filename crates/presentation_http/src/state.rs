//! Application state shared across handlers

use std::sync::Arc;

use application::CafeService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Café and station lookups
    pub cafe_service: Arc<CafeService>,
}

impl AppState {
    /// Create the state around a café service
    pub fn new(cafe_service: CafeService) -> Self {
        Self {
            cafe_service: Arc::new(cafe_service),
        }
    }
}
