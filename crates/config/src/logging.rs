//! Log output configuration.
//!
//! The terminal belongs to the board while the application runs, so log
//! records go to a file. By default that file lives next to the saved board
//! as `tack.log`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file name, relative to the data directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "tack.log";

/// Configuration for the log file.
///
/// # Examples
///
/// ```
/// use tack_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.file.is_none());
///
/// let config = LoggingConfig::with_level("debug");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to the log file.
    ///
    /// `RUST_LOG`, when set, takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Where to write logs. Defaults to `tack.log` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with the given level.
    #[must_use]
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            file: None,
        }
    }

    /// Returns the log file path, falling back to `tack.log` in `data_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use tack_config::LoggingConfig;
    ///
    /// let config = LoggingConfig::default();
    /// assert_eq!(config.file_in(Path::new("/data")), Path::new("/data/tack.log"));
    /// ```
    #[must_use]
    pub fn file_in(&self, data_dir: &std::path::Path) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_LOG_FILE_NAME))
    }

    /// Validates the logging configuration.
    ///
    /// Level names are compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not one of [`LOG_LEVELS`].
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
        assert!(config.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_accepts_every_known_level() {
        for level in LOG_LEVELS {
            assert!(LoggingConfig::with_level(*level).validate().is_ok());
        }
        assert!(LoggingConfig::with_level("WARN").validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_level() {
        let err = LoggingConfig::with_level("verbose")
            .validate()
            .expect_err("should be rejected");
        assert!(err.to_string().contains("\"verbose\""));
    }

    #[test]
    fn file_in_prefers_configured_path() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/var/log/tack.log")),
            ..Default::default()
        };
        assert_eq!(config.file_in(Path::new("/data")), Path::new("/var/log/tack.log"));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn file_not_serialized_when_none() {
        let json = serde_json::to_string(&LoggingConfig::default()).unwrap();
        assert_eq!(json, r#"{"level":"info"}"#);
    }
}
