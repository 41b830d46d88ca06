//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.

/// Dotted-path search query parsing and matching
pub mod query;

pub use query::SearchQuery;
