//! Configuration file discovery, reading and writing.
//!
//! Files may be JSON5 (comments, trailing commas) or plain JSON; both are
//! read with the JSON5 parser. Writing always produces pretty JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./tack.json5` or `./tack.json`
//! 2. User: `<config_dir>/tack/config.json5` or `<config_dir>/tack/config.json`
//!
//! where `<config_dir>` is `~/.config` on Linux.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["tack.json5", "tack.json"];

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "tack";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Lists every location a configuration file may live in, highest priority
/// first.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tack_config::persistence::candidate_paths;
///
/// let paths = candidate_paths(Path::new("/work"), Some(Path::new("/home/me/.config")));
/// assert_eq!(paths[0], Path::new("/work/tack.json5"));
/// assert_eq!(paths[3], Path::new("/home/me/.config/tack/config.json"));
/// ```
#[must_use]
pub fn candidate_paths(local_dir: &Path, config_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = config_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(APP_DIR).join(name)));
    local.chain(user).collect()
}

/// Finds the first existing configuration file among
/// [`candidate_paths`].
#[must_use]
pub fn find_config_file_in(local_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    candidate_paths(local_dir, config_dir)
        .into_iter()
        .find(|path| path.is_file())
}

/// Finds the configuration file in the working directory or the user
/// config directory.
///
/// # Examples
///
/// ```no_run
/// use tack_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Returns the default data directory, where the board and log live.
///
/// This is typically `~/.local/share/tack/` on Linux and
/// `~/Library/Application Support/tack/` on macOS.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed as `T`.
///
/// # Examples
///
/// ```no_run
/// use tack_config::persistence::read_config_file;
/// use tack_config::Config;
///
/// # fn main() -> tack_config::Result<()> {
/// let config: Config = read_config_file("tack.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes `config` to `path` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)
}
