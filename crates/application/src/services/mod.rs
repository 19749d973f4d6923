//! Application services - Use case implementations

mod cafe_service;

pub use cafe_service::{CafeSearchSettings, CafeService};
