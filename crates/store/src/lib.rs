//! Card storage for tack.
//!
//! This crate persists the kanban board and applies card operations to it.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`KeyValueStorage`]: The seam to where values live, with
//!   [`FileStorage`] and [`MemoryStorage`] implementations
//! - [`Store`]: Loads and saves the whole board under [`STORAGE_KEY`]
//! - [`Mutator`]: Creates, edits, moves and deletes cards, saving after
//!   every change
//! - [`StoreError`]: Error types for storage operations
//!
//! # Persistence
//!
//! The board is stored as a JSON array of cards. A missing, `null`, or
//! unreadable value loads the seed board; an empty array loads an empty
//! board.
//!
//! ```no_run
//! use tack_protocol::Status;
//! use tack_store::{FileStorage, Mutator, Store};
//!
//! # fn example() -> tack_store::Result<()> {
//! let mut mutator = Mutator::new(Store::new(FileStorage::new("/tmp/tack")));
//! mutator.create_card("Water plants", "", Status::Todo)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mutator;
pub mod storage;
pub mod store;

pub use error::{Result, StoreError};
pub use mutator::{CLEAR_ALL_PROMPT, DELETE_CARD_PROMPT, Mutator};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{STORAGE_KEY, Store};
