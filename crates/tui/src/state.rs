//! Application state management.
//!
//! This module defines the UI-side state of the board: which card is
//! selected, whether the card dialog or a confirmation is open, and the
//! markers of an ongoing drag. The cards themselves live in the
//! [`Mutator`](tack_store::Mutator); methods that need them take the
//! [`Board`] as an argument.

use tack_protocol::{Board, Card, CardId, Status};

/// Which input handler receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the board.
    #[default]
    Board,
    /// Keys edit the card dialog.
    Modal,
    /// Keys answer a yes/no question.
    Confirm,
}

/// What the card dialog will do on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    /// Create a new card in the given column.
    Create(Status),
    /// Edit the card with the given id.
    Edit(CardId),
}

/// The input field that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalField {
    /// Single-line title.
    #[default]
    Title,
    /// Multi-line description.
    Description,
}

/// The open Add Card / Edit Card dialog.
///
/// # Examples
///
/// ```
/// use tack_protocol::Status;
/// use tack_tui::state::{CardModal, ModalField};
///
/// let mut modal = CardModal::create(Status::Todo);
/// modal.input('h');
/// modal.input('i');
/// modal.next_field();
/// modal.newline();
/// assert_eq!(modal.title, "hi");
/// assert_eq!(modal.description, "\n");
/// assert_eq!(modal.field, ModalField::Description);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModal {
    /// Create or edit.
    pub mode: ModalMode,
    /// Current title text.
    pub title: String,
    /// Current description text.
    pub description: String,
    /// Focused field.
    pub field: ModalField,
}

impl CardModal {
    /// Opens an empty dialog for a new card in `status`.
    #[must_use]
    pub fn create(status: Status) -> Self {
        Self {
            mode: ModalMode::Create(status),
            title: String::new(),
            description: String::new(),
            field: ModalField::Title,
        }
    }

    /// Opens a dialog pre-filled from `card`.
    #[must_use]
    pub fn edit(card: &Card) -> Self {
        Self {
            mode: ModalMode::Edit(card.id.clone()),
            title: card.title.clone(),
            description: card.description.clone(),
            field: ModalField::Title,
        }
    }

    /// Returns the dialog heading.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.mode {
            ModalMode::Create(_) => "Add Card",
            ModalMode::Edit(_) => "Edit Card",
        }
    }

    /// Returns the card being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&CardId> {
        match &self.mode {
            ModalMode::Edit(id) => Some(id),
            ModalMode::Create(_) => None,
        }
    }

    /// Returns `true` if the dialog offers the delete action.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.editing().is_some()
    }

    /// Appends a character to the focused field.
    pub fn input(&mut self, ch: char) {
        self.focused_text_mut().push(ch);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_text_mut().pop();
    }

    /// Inserts a line break; titles are single-line, so this only affects
    /// the description.
    pub fn newline(&mut self) {
        if self.field == ModalField::Description {
            self.description.push('\n');
        }
    }

    /// Focuses the next field.
    pub fn next_field(&mut self) {
        self.field = match self.field {
            ModalField::Title => ModalField::Description,
            ModalField::Description => ModalField::Title,
        };
    }

    /// Focuses the previous field.
    pub fn prev_field(&mut self) {
        // Two fields, so previous and next coincide.
        self.next_field();
    }

    /// Focuses the title field.
    pub fn focus_title(&mut self) {
        self.field = ModalField::Title;
    }

    /// Returns `true` if the title is blank and saving must be refused.
    #[must_use]
    pub fn title_is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.field {
            ModalField::Title => &mut self.title,
            ModalField::Description => &mut self.description,
        }
    }
}

/// An action waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Delete every card.
    ClearAll,
    /// Delete one card; the dialog stays open if declined.
    DeleteCard(CardId),
}

/// A question shown in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// What happens on "yes".
    pub action: PendingAction,
    /// The question shown to the user.
    pub prompt: &'static str,
}

/// Markers of an ongoing mouse drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    /// The card being dragged.
    pub card: CardId,
    /// Whether the pointer moved since the button went down.
    pub moved: bool,
    /// The column currently under the pointer, if any.
    pub over: Option<Status>,
}

impl DragState {
    /// Starts dragging `card`.
    #[must_use]
    pub fn new(card: CardId) -> Self {
        Self {
            card,
            moved: false,
            over: None,
        }
    }
}

/// A one-off message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    /// Neutral feedback.
    Info(String),
    /// Something went wrong, e.g. a save failed.
    Error(String),
}

impl Flash {
    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

/// The application state.
///
/// Contains all mutable UI state: focus and selection, overlays, and drag
/// markers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Index of the focused column (0-2).
    pub selected_column: usize,
    /// Index of the selected card within the focused column, if any.
    pub selected_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The open card dialog.
    pub modal: Option<CardModal>,
    /// The open confirmation dialog.
    pub confirm: Option<Confirmation>,
    /// The ongoing drag.
    pub drag: Option<DragState>,
    /// Message for the status bar.
    pub flash: Option<Flash>,
}

impl AppState {
    /// Creates a new application state with the first column focused.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_tui::AppState;
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.selected_column, 0);
    /// assert!(state.selected_card.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns which handler should receive keys.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.confirm.is_some() {
            InputMode::Confirm
        } else if self.modal.is_some() {
            InputMode::Modal
        } else {
            InputMode::Board
        }
    }

    /// Returns the status of the focused column.
    #[must_use]
    pub fn selected_status(&self) -> Status {
        Status::from_index(self.selected_column).unwrap_or_default()
    }

    /// Toggles the help overlay visibility.
    ///
    /// Any drag in progress is abandoned.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.drag = None;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Moves the column focus to the left, wrapping around if needed.
    pub fn navigate_left(&mut self, board: &Board) {
        self.selected_column = (self.selected_column + 2) % 3;
        self.clamp_selection(board);
    }

    /// Moves the column focus to the right, wrapping around if needed.
    pub fn navigate_right(&mut self, board: &Board) {
        self.selected_column = (self.selected_column + 1) % 3;
        self.clamp_selection(board);
    }

    /// Moves the card selection up within the focused column.
    pub fn navigate_up(&mut self, board: &Board) {
        let len = board.count(self.selected_status());
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = match self.selected_card {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the card selection down within the focused column.
    pub fn navigate_down(&mut self, board: &Board) {
        let len = board.count(self.selected_status());
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = match self.selected_card {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    /// Returns the selected card, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::{Board, Status};
    /// use tack_tui::AppState;
    ///
    /// let mut board = Board::new();
    /// board.create_card("Task 1", "", Status::Todo);
    ///
    /// let mut state = AppState::new();
    /// assert!(state.selected_card(&board).is_none());
    ///
    /// state.navigate_down(&board);
    /// assert_eq!(state.selected_card(&board).unwrap().title, "Task 1");
    /// ```
    #[must_use]
    pub fn selected_card<'a>(&self, board: &'a Board) -> Option<&'a Card> {
        let idx = self.selected_card?;
        board.cards_with_status(self.selected_status()).nth(idx)
    }

    /// Focuses the card with `id`, wherever it is.
    ///
    /// Returns `false` and leaves the selection alone if the card is gone.
    pub fn select_card(&mut self, board: &Board, id: &CardId) -> bool {
        let Some(card) = board.get(id) else {
            return false;
        };
        let Some(idx) = board.cards_with_status(card.status).position(|c| &c.id == id) else {
            return false;
        };
        self.selected_column = card.status.index();
        self.selected_card = Some(idx);
        true
    }

    /// Clears the current card selection.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Ensures the card selection is valid for the focused column.
    pub fn clamp_selection(&mut self, board: &Board) {
        let len = board.count(self.selected_status());
        if len == 0 {
            self.selected_card = None;
        } else if let Some(idx) = self.selected_card
            && idx >= len
        {
            self.selected_card = Some(len - 1);
        }
    }
}
