//! # Domain Layer
//!
//! Core types and contracts for the Configuration Store Service.
//!
//! This layer is transport- and storage-agnostic: it defines what a
//! configuration record is, how a dotted-path search query is parsed and
//! matched, and the error taxonomy shared by every other crate in the
//! workspace.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | The [`Config`] record stored by the service |
//! | [`value_objects`] | [`SearchQuery`] parsing and nested-path matching |
//! | [`error`] | Error types and the shared [`Result`] alias |

pub mod entities;
pub mod error;
pub mod value_objects;

// Re-export commonly used types
pub use entities::Config;
pub use error::{Error, Result};
pub use value_objects::SearchQuery;
