//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the store and transport
//! layers.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Settings types and the figment-based loader |
//! | [`constants`] | Centralized configuration defaults |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig, ServerConfig, StoreConfig};
pub use logging::init_logging;
