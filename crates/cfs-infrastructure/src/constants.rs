//! Centralized configuration constants

/// Environment variable prefix for settings overrides (e.g. `CFS_SERVER_PORT`)
pub const CONFIG_ENV_PREFIX: &str = "CFS";

/// Default settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "cfs.toml";

/// Default bind host
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default backing file for the configuration store
pub const DEFAULT_STORE_PATH: &str = "db.json";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the log filter entirely
pub const LOG_FILTER_ENV: &str = "CFS_LOG";
