//! Shared protocol types for the tack application.
//!
//! This crate defines the core types used across all tack components:
//! cards and their statuses, the ordered card collection, TUI messages and
//! error types.
//!
//! # Overview
//!
//! - [`card`]: Card identifiers, statuses, and the `Card` struct
//! - [`board`]: The ordered card collection and its pure mutations
//! - [`message`]: TUI event messages
//! - [`seed`]: The collection shown when storage is empty
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use tack_protocol::{Board, Status};
//!
//! let mut board = Board::new();
//! let id = board.create_card("Implement feature", "Add login", Status::Todo).unwrap();
//!
//! board.move_card(&id, Status::Doing);
//! assert_eq!(board.count(Status::Doing), 1);
//! ```

pub mod board;
pub mod card;
pub mod error;
pub mod message;
pub mod seed;

// Re-export primary types at crate root for convenience
pub use board::Board;
pub use card::{Card, CardId, Status};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use seed::{SEED_CARD_ID, seed_board};
