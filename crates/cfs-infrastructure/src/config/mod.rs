//! Settings types and loading

/// Figment-based settings loader
pub mod loader;
/// Settings type definitions
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ServerConfig, StoreConfig};
