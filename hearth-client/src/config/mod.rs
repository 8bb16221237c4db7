//! Persistent configuration
//!
//! Stored as pretty-printed JSON in `<config dir>/hearth/config.json`. A
//! missing or unreadable file yields defaults so the client always starts.
//! `HEARTH_URL` and `HEARTH_TOKEN` override the stored address and token
//! for the current run without being written back.

pub mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use settings::Settings;

use crate::network::ConnectionParams;

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "hearth";

/// File name of the configuration file
const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the server address
pub const ENV_SERVER_URL: &str = "HEARTH_URL";

/// Environment variable overriding the access token
pub const ENV_ACCESS_TOKEN: &str = "HEARTH_TOKEN";

/// Failure to persist the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("failed to write configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                return Self::default();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Self::default()
        })
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Path of the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Connection parameters with environment overrides applied
    ///
    /// Returns `None` when no access token is available.
    pub fn connection_params(&self) -> Option<ConnectionParams> {
        let server_url =
            env_override(ENV_SERVER_URL).unwrap_or_else(|| self.settings.server_url.clone());
        let access_token =
            env_override(ENV_ACCESS_TOKEN).unwrap_or_else(|| self.settings.access_token.clone());
        if server_url.trim().is_empty() || access_token.trim().is_empty() {
            return None;
        }
        Some(ConnectionParams {
            server_url,
            access_token,
        })
    }
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::remove_var(ENV_SERVER_URL);
            std::env::remove_var(ENV_ACCESS_TOKEN);
        }
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(config.settings.server_url, settings::DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_load_invalid_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let config = Config::load_from(&path);
        assert!(config.settings.access_token.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config.settings.server_url = "http://10.0.0.2:8123".to_string();
        config.settings.access_token = "token".to_string();
        config.settings.locale = Some("de".to_string());

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path);

        assert_eq!(loaded.settings.server_url, "http://10.0.0.2:8123");
        assert_eq!(loaded.settings.access_token, "token");
        assert_eq!(loaded.settings.locale.as_deref(), Some("de"));
    }

    #[test]
    #[serial]
    fn test_connection_params_requires_token() {
        clear_env();
        assert!(Config::default().connection_params().is_none());
    }

    #[test]
    #[serial]
    fn test_connection_params_from_settings() {
        clear_env();
        let mut config = Config::default();
        config.settings.access_token = "stored".to_string();
        let params = config.connection_params().unwrap();
        assert_eq!(params.server_url, settings::DEFAULT_SERVER_URL);
        assert_eq!(params.access_token, "stored");
    }

    #[test]
    #[serial]
    fn test_env_overrides_settings() {
        clear_env();
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::set_var(ENV_SERVER_URL, "http://override:8123");
            std::env::set_var(ENV_ACCESS_TOKEN, "from-env");
        }
        let mut config = Config::default();
        config.settings.access_token = "stored".to_string();

        let params = config.connection_params().unwrap();
        clear_env();

        assert_eq!(params.server_url, "http://override:8123");
        assert_eq!(params.access_token, "from-env");
        // Overrides never land in the stored settings
        assert_eq!(config.settings.access_token, "stored");
    }

    #[test]
    #[serial]
    fn test_blank_env_is_ignored() {
        clear_env();
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::set_var(ENV_ACCESS_TOKEN, "  ");
        }
        let params = Config::default().connection_params();
        clear_env();
        assert!(params.is_none());
    }
}
