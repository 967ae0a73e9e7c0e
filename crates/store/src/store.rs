//! Loading and saving the board.

use chrono::Utc;
use tack_protocol::{Board, seed_board};
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::storage::KeyValueStorage;

/// The storage key the board is persisted under.
pub const STORAGE_KEY: &str = "kanban-cards";

/// Persists the whole board under [`STORAGE_KEY`].
///
/// # Examples
///
/// ```
/// use tack_protocol::{Board, Status};
/// use tack_store::{MemoryStorage, Store};
///
/// let mut store = Store::new(MemoryStorage::new());
///
/// let mut board = Board::new();
/// board.create_card("Buy milk", "", Status::Todo);
/// store.save(&board).unwrap();
///
/// assert_eq!(store.load(), board);
/// ```
#[derive(Debug)]
pub struct Store<S> {
    storage: S,
}

impl<S: KeyValueStorage> Store<S> {
    /// Wraps a storage backend.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the underlying storage mutably.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Reads the persisted board.
    ///
    /// Never fails: when nothing usable is stored (the key is missing, holds
    /// `null`, cannot be parsed, or cannot be read) the seed board is
    /// returned instead. An empty array is a valid board and is returned
    /// as-is.
    #[instrument(skip(self))]
    pub fn load(&self) -> Board {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("no saved board, starting from seed");
                return seed_board(Utc::now());
            }
            Err(e) => {
                warn!(error = %e, "failed to read saved board, starting from seed");
                return seed_board(Utc::now());
            }
        };

        match Board::from_json(&raw) {
            Ok(Some(board)) => {
                debug!(cards = board.len(), "loaded saved board");
                board
            }
            Ok(None) => {
                info!("saved board is null, starting from seed");
                seed_board(Utc::now())
            }
            Err(e) => {
                warn!(error = %e, "saved board is corrupt, starting from seed");
                seed_board(Utc::now())
            }
        }
    }

    /// Overwrites the persisted board with `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be encoded or written.
    #[instrument(skip(self, board), fields(cards = board.len()))]
    pub fn save(&mut self, board: &Board) -> Result<()> {
        let json = board.to_json()?;
        self.storage.set(STORAGE_KEY, &json)?;
        debug!("board saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tack_protocol::{SEED_CARD_ID, Status};
    use tempfile::TempDir;

    fn is_seed(board: &Board) -> bool {
        board.len() == 1 && board.cards()[0].id.as_str() == SEED_CARD_ID
    }

    #[test]
    fn load_missing_key_returns_seed() {
        let store = Store::new(MemoryStorage::new());
        let board = store.load();

        assert!(is_seed(&board));
        assert_eq!(board.cards()[0].title, "Fix Addigy ADE tokens");
        assert_eq!(board.cards()[0].status, Status::Todo);
    }

    #[test]
    fn load_null_returns_seed() {
        let store = Store::new(MemoryStorage::new().with_value(STORAGE_KEY, "null"));
        assert!(is_seed(&store.load()));
    }

    #[test]
    fn load_corrupt_value_returns_seed() {
        for raw in ["{not json", r#"{"cards":[]}"#, r#"[{"id":"x"}]"#, "42"] {
            let store = Store::new(MemoryStorage::new().with_value(STORAGE_KEY, raw));
            assert!(is_seed(&store.load()), "expected seed for {raw:?}");
        }
    }

    #[test]
    fn load_unknown_status_returns_seed() {
        let raw = r#"[{"id":"card-1","title":"T","description":"","status":"blocked","createdAt":"2024-01-01T00:00:00Z"}]"#;
        let store = Store::new(MemoryStorage::new().with_value(STORAGE_KEY, raw));
        assert!(is_seed(&store.load()));
    }

    #[test]
    fn load_empty_array_returns_empty_board() {
        let store = Store::new(MemoryStorage::new().with_value(STORAGE_KEY, "[]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_accepts_records_written_by_a_browser() {
        let raw = r#"[
            {"id":"card-addigy-1","title":"Fix Addigy ADE tokens","description":"","status":"todo","createdAt":"2024-03-01T10:00:00.000Z"},
            {"id":"card-1709287200000","title":"Ship it","description":"soon","status":"done","createdAt":"2024-03-01T10:00:00.000Z"}
        ]"#;
        let store = Store::new(MemoryStorage::new().with_value(STORAGE_KEY, raw));

        let board = store.load();
        assert_eq!(board.len(), 2);
        assert_eq!(board.count(Status::Done), 1);
    }

    #[test]
    fn save_writes_json_array_under_storage_key() {
        let mut store = Store::new(MemoryStorage::new());
        let mut board = Board::new();
        board.create_card("Task", "", Status::Doing);

        store.save(&board).expect("save");

        let raw = store.storage().value(STORAGE_KEY).expect("value stored");
        assert!(raw.starts_with('['));
        assert!(raw.contains(r#""status":"doing""#));
        assert_eq!(store.storage().writes(), 1);
    }

    #[test]
    fn save_empty_board_then_load_stays_empty() {
        let mut store = Store::new(MemoryStorage::new());
        store.save(&Board::new()).expect("save");
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_propagates_storage_errors() {
        let mut store = Store::new(MemoryStorage::new());
        store.storage_mut().set_fail_writes(true);

        assert!(store.save(&Board::new()).is_err());
    }

    #[test]
    fn file_storage_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let mut store = Store::new(FileStorage::new(temp.path()));

        let mut board = Board::new();
        board.create_card("Persist me", "with details", Status::Todo);
        store.save(&board).expect("save");

        assert!(temp.path().join("kanban-cards.json").exists());

        let reopened = Store::new(FileStorage::new(temp.path()));
        assert_eq!(reopened.load(), board);
    }

    #[test]
    fn unreadable_file_returns_seed() {
        let temp = TempDir::new().expect("temp dir");
        // A directory where the value file should be makes the read fail.
        std::fs::create_dir(temp.path().join("kanban-cards.json")).expect("mkdir");

        let store = Store::new(FileStorage::new(temp.path()));
        assert!(is_seed(&store.load()));
    }
}
