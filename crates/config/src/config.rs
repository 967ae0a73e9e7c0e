//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tack application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{default_data_dir, find_config_file, read_config_file, write_config_file};

/// Where the board is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `kanban-cards.json`.
    ///
    /// Defaults to the platform data directory (`~/.local/share/tack` on
    /// Linux).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// The main configuration struct for the tack application.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tack_config::{Config, LoggingConfig, StorageConfig};
///
/// let config = Config::default();
/// assert_eq!(config.logging.level, "info");
///
/// let config = Config {
///     storage: StorageConfig { data_dir: Some(PathBuf::from("/tmp/board")) },
///     logging: LoggingConfig::with_level("debug"),
/// };
/// assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/board"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log file settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// See [`persistence`](crate::persistence) for the search order. If no
    /// configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_config::Config;
    ///
    /// # fn example() -> tack_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Board lives in {}", config.data_dir()?.display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_config::{Config, LoggingConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.logging = LoggingConfig::with_level("loud");
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }

    /// Returns the directory the board is stored in.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the platform data
    /// directory cannot be determined.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    /// Returns the log file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file is not configured and the data
    /// directory cannot be determined.
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(file) => Ok(file.clone()),
            None => Ok(self.logging.file_in(&self.data_dir()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"logging": {"level": "debug"}}"#).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn data_dir_prefers_configured_path() {
        let config = Config {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("/srv/tack")),
            },
            ..Default::default()
        };
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/srv/tack"));
        assert_eq!(config.log_file().unwrap(), PathBuf::from("/srv/tack/tack.log"));
    }

    #[test]
    fn log_file_prefers_configured_path() {
        let config = Config {
            logging: LoggingConfig {
                file: Some(PathBuf::from("/tmp/debug.log")),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.log_file().unwrap(), PathBuf::from("/tmp/debug.log"));
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // keep the board in a synced folder
                storage: { data_dir: "/home/me/Sync/tack" },
                logging: { level: "warn", file: "/tmp/tack.log" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/home/me/Sync/tack")));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/tack.log")));
    }

    #[test]
    fn load_from_rejects_invalid_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"logging": {"level": "chatty"}}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            storage: StorageConfig {
                data_dir: Some(dir.path().join("data")),
            },
            logging: LoggingConfig::with_level("trace"),
        };

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }

    #[test]
    fn unset_paths_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(json, r#"{"storage":{},"logging":{"level":"info"}}"#);
    }
}
