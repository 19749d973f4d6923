//! Domain entities - Records produced by searches

mod cafe_candidate;
mod cafe_search_query;
mod station;

pub use cafe_candidate::CafeCandidate;
pub use cafe_search_query::CafeSearchQuery;
pub use station::Station;
