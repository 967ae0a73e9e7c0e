//! Widget components for the tack TUI.
//!
//! This module provides reusable rendering functions for the Kanban board UI,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders a [`BoardView`](crate::view::BoardView) or a
//! piece of UI state to a buffer. Layout helpers that rendering relies on are
//! public too, so mouse hit-testing uses exactly the same geometry.
//!
//! # Modules
//!
//! - [`board`]: Renders the three columns and maps positions back to cards
//! - [`column`]: Renders a column with its heading, `[+]` and card list
//! - [`card`]: Renders a card colored by its status
//! - [`modal`]: Renders the Add Card / Edit Card dialog
//! - [`confirm`]: Renders the yes/no confirmation dialog
//! - [`help`]: Renders the keybinding overlay
//! - [`status_bar`]: Renders the footer with hints and flash messages
//!
//! # Color Coding
//!
//! | Status | Color |
//! |--------|-------|
//! | `Todo` | Blue (`Color::Blue`) |
//! | `Doing` | Yellow (`Color::Yellow`) |
//! | `Done` | Green (`Color::Green`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tack_protocol::{Board, Status};
//! use tack_tui::view::BoardView;
//! use tack_tui::widgets;
//!
//! let mut board = Board::new();
//! board.create_card("Example", "A sample card", Status::Todo);
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&BoardView::project(&board), widgets::BoardHighlight::default(), area, &mut buf);
//! ```

pub mod board;
pub mod card;
pub mod column;
pub mod confirm;
pub mod help;
pub mod modal;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use board::{BoardHighlight, BoardHit, column_areas, hit_test, render_board};
pub use card::{CardStyle, render_card, status_color};
pub use column::{ColumnHighlight, ColumnPosition, render_column};
pub use confirm::{ConfirmLayout, confirm_layout, render_confirm_dialog};
pub use help::render_help_overlay;
pub use modal::{ModalButton, ModalLayout, button_at, field_at, modal_layout, render_card_modal};
pub use status_bar::render_status_bar;
