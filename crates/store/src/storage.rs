//! Key-value storage backends.
//!
//! The board is persisted under a single string key. [`KeyValueStorage`] is
//! the seam between the [`Store`](crate::Store) and the place those values
//! actually live:
//!
//! - [`FileStorage`] keeps one JSON file per key in a data directory.
//! - [`MemoryStorage`] keeps values in process, and counts writes.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.local/share/tack/       # Linux
//! ~/Library/Application Support/tack/  # macOS
//! └── kanban-cards.json
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::error::{Result, StoreError};

/// A string-keyed store of string values.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend holds the key but cannot read it.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: each key is a `<key>.json` file in a directory.
///
/// Writes land in a temporary sibling first and are renamed over the
/// destination, so readers never observe a partially written value.
///
/// # Examples
///
/// ```no_run
/// use tack_store::{FileStorage, KeyValueStorage};
///
/// # fn example() -> tack_store::Result<()> {
/// let mut storage = FileStorage::new("/tmp/tack");
/// storage.set("greeting", "\"hello\"")?;
/// assert_eq!(storage.get("greeting")?.as_deref(), Some("\"hello\""));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `base_path`.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the directory values are stored in.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the file path for a key.
    ///
    /// Path separators and dots in the key are replaced so a key can never
    /// escape the base directory.
    #[must_use]
    pub fn key_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', '.'], "_");
        self.base_path.join(format!("{safe_key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        debug!(?path, "reading storage key");

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(?path, "storage key not found");
                Ok(None)
            }
            Err(source) => {
                warn!(?path, error = %source, "failed to read storage key");
                Err(StoreError::Read { path, source })
            }
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        if !self.base_path.exists() {
            debug!(base_path = ?self.base_path, "creating storage directory");
            fs::create_dir_all(&self.base_path).map_err(write_err)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source));
        }

        debug!(?path, "storage key written");
        Ok(())
    }
}

/// In-process storage.
///
/// Counts successful writes and can be told to reject them, which makes it
/// the backend of choice for tests.
///
/// # Examples
///
/// ```
/// use tack_store::{KeyValueStorage, MemoryStorage};
///
/// let mut storage = MemoryStorage::new();
/// storage.set("k", "v").unwrap();
/// assert_eq!(storage.writes(), 1);
/// assert_eq!(storage.value("k"), Some("v"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this storage with `key` preset to `value`.
    ///
    /// Presetting does not count as a write.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable {
                reason: "writes are disabled".to_string(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
