//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update state and drive card mutations.
///
/// # Examples
///
/// ```
/// use tack_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(!msg.is_terminating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move focus to the column on the left.
    NavigateLeft,
    /// Move focus to the column on the right.
    NavigateRight,
    /// Move selection up within the focused column.
    NavigateUp,
    /// Move selection down within the focused column.
    NavigateDown,
    /// Open the selected card for editing.
    Select,
    /// Open the card dialog in create mode for the focused column.
    AddCard,
    /// Move the selected card one column to the left.
    MoveCardLeft,
    /// Move the selected card one column to the right.
    MoveCardRight,
    /// Ask to delete every card on the board.
    ClearAll,
    /// Reload the board from storage.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape: cancel the dialog, dismiss an overlay or clear selection.
    Escape,
    /// Quit the application.
    Quit,

    // --- Pointer messages ---
    /// Left button pressed at coordinates (column, row).
    MouseDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer dragged with the left button held.
    MouseDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Left button released.
    MouseUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },

    // --- Card dialog messages ---
    /// Type a character into the focused field.
    ModalInput {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the character before the cursor.
    ModalBackspace,
    /// Insert a line break (description only).
    ModalNewline,
    /// Focus the next field.
    ModalNextField,
    /// Focus the previous field.
    ModalPrevField,
    /// Validate and save the dialog.
    ModalSave,
    /// Ask to delete the card being edited.
    ModalDelete,

    // --- Confirmation messages ---
    /// Accept the pending confirmation.
    Confirm,
    /// Reject the pending confirmation.
    Decline,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
