//! Card mutations with write-through persistence.
//!
//! The [`Mutator`] owns the in-memory [`Board`] and the [`Store`] behind it.
//! Every operation that changes the board saves it immediately; operations
//! that turn out to be no-ops (blank title, unknown id, same status) leave
//! storage untouched.
//!
//! When a save fails the in-memory change stays applied and the error is
//! returned, so the caller can tell the user their last change was not
//! persisted.

use tack_protocol::{Board, CardId, Status};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::Store;

/// Confirmation prompt shown before clearing the board.
pub const CLEAR_ALL_PROMPT: &str = "Are you sure you want to delete all cards?";

/// Confirmation prompt shown before deleting a single card.
pub const DELETE_CARD_PROMPT: &str = "Delete this card?";

/// Applies card operations to the board and persists each change.
///
/// # Examples
///
/// ```
/// use tack_protocol::Status;
/// use tack_store::{MemoryStorage, Mutator, Store};
///
/// # fn example() -> tack_store::Result<()> {
/// let mut mutator = Mutator::new(Store::new(MemoryStorage::new().with_value("kanban-cards", "[]")));
///
/// let id = mutator.create_card("Buy milk", "", Status::Todo)?.expect("valid title");
/// assert!(mutator.move_card(&id, Status::Doing)?);
/// assert!(mutator.delete_card(&id)?);
/// assert!(mutator.board().is_empty());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct Mutator<S> {
    board: Board,
    store: Store<S>,
}

impl<S: KeyValueStorage> Mutator<S> {
    /// Loads the board from `store` and takes ownership of both.
    #[must_use]
    pub fn new(store: Store<S>) -> Self {
        let board = store.load();
        info!(cards = board.len(), "board loaded");
        Self { board, store }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the store the board is persisted to.
    #[must_use]
    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    /// Returns the store mutably.
    pub fn store_mut(&mut self) -> &mut Store<S> {
        &mut self.store
    }

    /// Creates a card and persists the board.
    ///
    /// Returns `Ok(None)` without touching storage when the trimmed title is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the board could not be saved. The card has been
    /// added in memory regardless.
    #[instrument(skip(self, title, description))]
    pub fn create_card(
        &mut self,
        title: &str,
        description: &str,
        status: Status,
    ) -> Result<Option<CardId>> {
        let Some(id) = self.board.create_card(title, description, status) else {
            debug!("refusing to create card with blank title");
            return Ok(None);
        };
        info!(%id, "card created");
        self.persist()?;
        Ok(Some(id))
    }

    /// Replaces a card's title and description and persists the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board could not be saved.
    #[instrument(skip(self, id, title, description), fields(card = %id))]
    pub fn edit_card(&mut self, id: &CardId, title: &str, description: &str) -> Result<bool> {
        if !self.board.edit_card(id, title, description) {
            debug!("edit was a no-op");
            return Ok(false);
        }
        info!("card edited");
        self.persist()?;
        Ok(true)
    }

    /// Moves a card to another column and persists the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board could not be saved.
    #[instrument(skip(self, id), fields(card = %id))]
    pub fn move_card(&mut self, id: &CardId, status: Status) -> Result<bool> {
        if !self.board.move_card(id, status) {
            debug!("move was a no-op");
            return Ok(false);
        }
        info!("card moved");
        self.persist()?;
        Ok(true)
    }

    /// Deletes a card and persists the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board could not be saved.
    #[instrument(skip(self, id), fields(card = %id))]
    pub fn delete_card(&mut self, id: &CardId) -> Result<bool> {
        if !self.board.delete_card(id) {
            debug!("delete was a no-op");
            return Ok(false);
        }
        info!("card deleted");
        self.persist()?;
        Ok(true)
    }

    /// Deletes every card once `confirm` agrees.
    ///
    /// `confirm` receives [`CLEAR_ALL_PROMPT`]. It is not called at all when
    /// the board is already empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the board could not be saved.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_store::{MemoryStorage, Mutator, Store};
    ///
    /// let mut mutator = Mutator::new(Store::new(MemoryStorage::new()));
    /// assert!(!mutator.clear_all(|_| false).unwrap());
    /// assert!(mutator.clear_all(|_| true).unwrap());
    /// assert!(mutator.board().is_empty());
    /// ```
    #[instrument(skip(self, confirm))]
    pub fn clear_all<F>(&mut self, confirm: F) -> Result<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        if self.board.is_empty() {
            return Ok(false);
        }
        if !confirm(CLEAR_ALL_PROMPT) {
            debug!("clear declined");
            return Ok(false);
        }
        self.board.clear();
        info!("board cleared");
        self.persist()?;
        Ok(true)
    }

    /// Replaces the in-memory board with what storage currently holds.
    pub fn reload(&mut self) {
        self.board = self.store.load();
        info!(cards = self.board.len(), "board reloaded");
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.board)
    }
}
