//! Error types for storage operations.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the board.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading a key from storage failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a key to storage failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The storage backend refused the write.
    ///
    /// Used by backends that are not file based.
    #[error("storage unavailable: {reason}")]
    Unavailable {
        /// A description of why the backend refused.
        reason: String,
    },

    /// The board could not be encoded.
    #[error(transparent)]
    Encoding(#[from] tack_protocol::ProtocolError),
}

/// A specialized Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_write_includes_path() {
        let err = StoreError::Write {
            path: PathBuf::from("/data/kanban-cards.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write /data/kanban-cards.json: denied"
        );
    }

    #[test]
    fn error_display_unavailable() {
        let err = StoreError::Unavailable {
            reason: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "storage unavailable: quota exceeded");
    }

    #[test]
    fn error_source_is_preserved() {
        use std::error::Error as _;

        let err = StoreError::Read {
            path: PathBuf::from("x.json"),
            source: std::io::Error::other("boom"),
        };
        assert_eq!(err.source().map(ToString::to_string), Some("boom".to_string()));
    }
}
