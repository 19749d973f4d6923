//! Café search query

use crate::errors::DomainError;

/// A free-text café search with a result ceiling
///
/// The ceiling truncates the upstream result list; it never drives pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeSearchQuery {
    cafe_name: String,
    max_results: usize,
}

impl CafeSearchQuery {
    /// Create a query from a café name and a result ceiling
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` if the name is blank.
    pub fn new(cafe_name: &str, max_results: usize) -> Result<Self, DomainError> {
        let cafe_name = cafe_name.trim();
        if cafe_name.is_empty() {
            return Err(DomainError::missing("cafe name"));
        }
        Ok(Self {
            cafe_name: cafe_name.to_string(),
            max_results,
        })
    }

    /// The trimmed café name
    pub fn cafe_name(&self) -> &str {
        &self.cafe_name
    }

    /// Maximum number of candidates to return
    pub const fn max_results(&self) -> usize {
        self.max_results
    }
}
