//! Terminal UI for the tack kanban board.
//!
//! This crate draws the board with Ratatui and turns key presses and mouse
//! gestures into card operations on a [`Mutator`](tack_store::Mutator).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Selection, dialogs, drag state and flash messages
//! - [`view`]: Projection of the board onto columns for rendering
//! - [`layout`]: Screen layout shared by rendering and hit-testing
//! - [`widgets`]: Rendering functions for each part of the screen
//! - [`event`]: Terminal events to [`Message`](tack_protocol::Message)s
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//!
//! # Example
//!
//! ```no_run
//! use tack_store::{FileStorage, Mutator, Store};
//! use tack_tui::{App, terminal};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let store = Store::new(FileStorage::new("/tmp/tack"));
//!     let mut app = App::new(Mutator::new(store));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::AppState;
