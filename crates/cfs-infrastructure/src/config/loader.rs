//! Settings loader
//!
//! Handles loading settings from defaults, a TOML file, and environment
//! variables, using Figment for merging.

use crate::config::AppConfig;
use crate::constants::*;
use crate::logging::log_config_loaded;
use cfs_domain::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::path::{Path, PathBuf};

/// Settings loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Settings file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new settings loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the settings file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load settings from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML settings file (explicit path, or `cfs.toml` in the working
    ///    directory when present)
    /// 3. Environment variables with prefix (e.g. `CFS_SERVER_PORT`,
    ///    `CFS_STORE_PATH`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, config_path.exists());
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        // Underscore separates nested keys (e.g. CFS_SERVER_PORT)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|source| Error::config(format!("Failed to extract settings: {source}")))?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application settings
fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("server.port must not be 0"));
    }
    if config.server.host.is_empty() {
        return Err(Error::config("server.host must not be empty"));
    }
    if config.store.path.as_os_str().is_empty() {
        return Err(Error::config("store.path must not be empty"));
    }

    crate::logging::parse_log_level(&config.logging.level)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConfigLoader::new()
            .with_config_path("/nonexistent/cfs.toml")
            .with_env_prefix("CFS_TEST_DEFAULTS")
            .load()
            .unwrap();

        assert_eq!(config.server.host, DEFAULT_SERVER_HOST);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.store.path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cfs.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9999\n\n[store]\npath = \"/data/db.json\"\n",
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_config_path(&path)
            .with_env_prefix("CFS_TEST_TOML")
            .load()
            .unwrap();

        assert_eq!(config.server.port, 9999);
        assert_eq!(config.store.path, PathBuf::from("/data/db.json"));
        // Untouched sections keep their defaults
        assert_eq!(config.server.host, DEFAULT_SERVER_HOST);
    }

    #[test]
    fn test_env_overrides_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("cfs.toml", "[server]\nport = 9999\n")?;
            jail.set_env("CFS_TEST_ENV_SERVER_PORT", "7777");

            let config = ConfigLoader::new()
                .with_config_path("cfs.toml")
                .with_env_prefix("CFS_TEST_ENV")
                .load()
                .expect("settings should load");

            assert_eq!(config.server.port, 7777);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cfs.toml");
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();

        let error = ConfigLoader::new()
            .with_config_path(&path)
            .with_env_prefix("CFS_TEST_PORT")
            .load()
            .unwrap_err();
        assert!(matches!(error, Error::Config { .. }));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cfs.toml");
        std::fs::write(&path, "[logging]\nlevel = \"verbose\"\n").unwrap();

        let error = ConfigLoader::new()
            .with_config_path(&path)
            .with_env_prefix("CFS_TEST_LEVEL")
            .load()
            .unwrap_err();
        assert!(matches!(error, Error::Config { .. }));
    }
}
