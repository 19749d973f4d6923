//! Domain layer for Cafetale
//!
//! Contains the café and station records returned to clients, the search
//! query type, and the value objects they are built from.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
