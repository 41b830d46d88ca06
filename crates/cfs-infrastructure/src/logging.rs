//! Structured logging with tracing
//!
//! Configures structured logging for the service using the tracing
//! ecosystem, with plain or JSON output per the logging settings.

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use cfs_domain::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// The `CFS_LOG` environment variable overrides the configured level with
/// a full tracing filter directive.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // json_format picks the fmt layer flavor (types differ so we need
    // separate branches)
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log settings-file loading status
pub fn log_config_loaded(config_path: &std::path::Path, found: bool) {
    if found {
        info!("Settings loaded from {}", config_path.display());
    } else {
        warn!("Settings file not found: {}", config_path.display());
    }
}
