//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, card mutations and
//! rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tack_protocol::{Board, Card, CardId, Message, Status};
use tack_store::{CLEAR_ALL_PROMPT, DELETE_CARD_PROMPT, KeyValueStorage, Mutator, StoreError};
use tracing::{debug, error, info};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{MIN_HEIGHT, MIN_WIDTH, screen_layout},
    state::{CardModal, Confirmation, DragState, Flash, InputMode, ModalMode, PendingAction},
    terminal::AppTerminal,
    view::BoardView,
    widgets::{
        BoardHighlight, BoardHit, ModalButton, button_at, confirm_layout, field_at, hit_test,
        modal_layout, render_board, render_card_modal, render_confirm_dialog, render_help_overlay,
        render_status_bar,
    },
};

/// The main application struct.
///
/// Owns the [`Mutator`], and with it the board and its storage, plus all UI
/// state. Every card change goes through the mutator so it is persisted
/// before the next frame is drawn.
#[derive(Debug)]
pub struct App<S> {
    mutator: Mutator<S>,
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
}

impl<S: KeyValueStorage> App<S> {
    /// Creates a new application around a loaded board.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_store::{MemoryStorage, Mutator, Store};
    /// use tack_tui::App;
    ///
    /// let app = App::new(Mutator::new(Store::new(MemoryStorage::new())));
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(mutator: Mutator<S>) -> Self {
        Self {
            mutator,
            state: AppState::new(),
            should_quit: false,
            last_area: Rect::default(),
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the board as currently held in memory.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.mutator.board()
    }

    /// Returns the mutator.
    #[must_use]
    pub fn mutator(&self) -> &Mutator<S> {
        &self.mutator
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal size used for mouse hit-testing.
    ///
    /// [`view`](Self::view) does this on every frame; call it directly to
    /// drive mouse messages without rendering.
    pub fn set_area(&mut self, area: Rect) {
        self.last_area = area;
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Otherwise the
    /// message goes to whichever of the confirmation, the card dialog or the
    /// board is on top.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        // Flash messages last until the next deliberate action.
        if !matches!(msg, Message::MouseDrag { .. } | Message::MouseUp { .. }) {
            self.state.flash = None;
        }

        // Every release ends the drag, whatever is on top.
        if let Message::MouseUp { column, row } = msg {
            if self.state.help_visible || self.state.input_mode() != InputMode::Board {
                self.state.drag = None;
            } else {
                self.handle_release(column, row);
            }
            return;
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                Message::MouseDrag { .. } => {}
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match self.state.input_mode() {
            InputMode::Confirm => self.update_confirm(msg),
            InputMode::Modal => self.update_modal(msg),
            InputMode::Board => self.update_board(msg),
        }
    }

    fn update_board(&mut self, msg: Message) {
        match msg {
            Message::Escape => self.state.clear_selection(),
            Message::NavigateLeft => self.state.navigate_left(self.mutator.board()),
            Message::NavigateRight => self.state.navigate_right(self.mutator.board()),
            Message::NavigateUp => self.state.navigate_up(self.mutator.board()),
            Message::NavigateDown => self.state.navigate_down(self.mutator.board()),
            Message::Select => {
                if let Some(card) = self.state.selected_card(self.mutator.board()).cloned() {
                    self.open_edit(&card);
                }
            }
            Message::AddCard => self.open_create(self.state.selected_status()),
            Message::MoveCardLeft => self.move_selected(Status::previous),
            Message::MoveCardRight => self.move_selected(Status::next),
            Message::ClearAll => {
                // An empty board is cleared without asking.
                if !self.mutator.board().is_empty() {
                    self.ask(PendingAction::ClearAll, CLEAR_ALL_PROMPT);
                }
            }
            Message::Refresh => {
                self.mutator.reload();
                self.state.clamp_selection(self.mutator.board());
                self.state.flash = Some(Flash::Info("Board reloaded".to_string()));
            }
            Message::ToggleHelp => self.state.toggle_help(),
            Message::MouseDown { column, row } => self.handle_board_press(column, row),
            Message::MouseDrag { column, row } => self.handle_drag(column, row),
            _ => {}
        }
    }

    fn update_modal(&mut self, msg: Message) {
        match msg {
            Message::Escape => self.close_modal(),
            Message::ModalInput { ch } => self.edit_modal(|modal| modal.input(ch)),
            Message::ModalBackspace => self.edit_modal(CardModal::backspace),
            Message::ModalNewline => self.edit_modal(CardModal::newline),
            Message::ModalNextField => self.edit_modal(CardModal::next_field),
            Message::ModalPrevField => self.edit_modal(CardModal::prev_field),
            Message::ModalSave => self.save_modal(),
            Message::ModalDelete => self.request_delete(),
            Message::MouseDown { column, row } => self.handle_modal_press(column, row),
            _ => {}
        }
    }

    fn edit_modal(&mut self, f: impl FnOnce(&mut CardModal)) {
        if let Some(modal) = self.state.modal.as_mut() {
            f(modal);
        }
    }

    fn update_confirm(&mut self, msg: Message) {
        match msg {
            Message::Confirm => self.resolve_confirmation(true),
            Message::Decline | Message::Escape => self.resolve_confirmation(false),
            Message::MouseDown { column, row } => {
                let layout = confirm_layout(self.last_area);
                let pos = Position::new(column, row);
                if layout.yes.contains(pos) {
                    self.resolve_confirmation(true);
                } else if layout.no.contains(pos) || !layout.outer.contains(pos) {
                    self.resolve_confirmation(false);
                }
            }
            _ => {}
        }
    }

    fn open_create(&mut self, status: Status) {
        debug!(%status, "opening card dialog");
        self.state.drag = None;
        self.state.modal = Some(CardModal::create(status));
    }

    fn open_edit(&mut self, card: &Card) {
        debug!(card = %card.id, "opening card dialog");
        self.state.drag = None;
        self.state.modal = Some(CardModal::edit(card));
    }

    fn close_modal(&mut self) {
        self.state.modal = None;
        self.state.clamp_selection(self.mutator.board());
    }

    fn ask(&mut self, action: PendingAction, prompt: &'static str) {
        self.state.drag = None;
        self.state.confirm = Some(Confirmation { action, prompt });
    }

    /// Validates the dialog and hands it to the mutator.
    ///
    /// A blank title keeps the dialog open with the title focused.
    fn save_modal(&mut self) {
        let Some(modal) = self.state.modal.as_mut() else {
            return;
        };
        if modal.title_is_blank() {
            modal.focus_title();
            return;
        }

        let modal = modal.clone();
        match modal.mode {
            ModalMode::Create(status) => {
                match self.mutator.create_card(&modal.title, &modal.description, status) {
                    Ok(Some(id)) => self.select(&id),
                    Ok(None) => {
                        if let Some(open) = self.state.modal.as_mut() {
                            open.focus_title();
                        }
                        return;
                    }
                    Err(err) => self.report(&err),
                }
            }
            ModalMode::Edit(id) => {
                if let Err(err) = self.mutator.edit_card(&id, &modal.title, &modal.description) {
                    self.report(&err);
                }
            }
        }
        self.close_modal();
    }

    fn request_delete(&mut self) {
        let Some(id) = self.state.modal.as_ref().and_then(CardModal::editing).cloned() else {
            return;
        };
        self.ask(PendingAction::DeleteCard(id), DELETE_CARD_PROMPT);
    }

    fn resolve_confirmation(&mut self, accepted: bool) {
        let Some(confirmation) = self.state.confirm.take() else {
            return;
        };
        if !accepted {
            // A declined delete leaves the dialog open.
            debug!(prompt = confirmation.prompt, "confirmation declined");
            return;
        }

        let result = match confirmation.action {
            PendingAction::ClearAll => self.mutator.clear_all(|_| true).map(|_| ()),
            PendingAction::DeleteCard(id) => {
                self.state.modal = None;
                self.mutator.delete_card(&id).map(|_| ())
            }
        };
        if let Err(err) = result {
            self.report(&err);
        }
        self.state.clamp_selection(self.mutator.board());
    }

    fn move_selected(&mut self, target: fn(Status) -> Option<Status>) {
        let Some(card) = self.state.selected_card(self.mutator.board()) else {
            return;
        };
        let Some(status) = target(card.status) else {
            return;
        };
        let id = card.id.clone();
        self.move_card(&id, status);
    }

    fn move_card(&mut self, id: &CardId, status: Status) {
        match self.mutator.move_card(id, status) {
            Ok(true) => self.select(id),
            Ok(false) => {}
            Err(err) => {
                self.report(&err);
                self.select(id);
            }
        }
    }

    fn select(&mut self, id: &CardId) {
        if !self.state.select_card(self.mutator.board(), id) {
            self.state.clamp_selection(self.mutator.board());
        }
    }

    /// Logs a failed save and tells the user about it.
    ///
    /// The change itself stays applied in memory.
    fn report(&mut self, err: &StoreError) {
        error!(error = %err, "failed to save board");
        self.state.flash = Some(Flash::Error(format!("Could not save board: {err}")));
    }

    fn board_hit(&self, column: u16, row: u16) -> Option<BoardHit> {
        let layout = screen_layout(self.last_area)?;
        let view = BoardView::project(self.mutator.board());
        hit_test(&view, self.highlight(), layout.board, column, row)
    }

    /// Handles a left-button press on the board.
    ///
    /// Pressing a heading opens the card dialog for that column; pressing a
    /// card selects it and starts a drag.
    fn handle_board_press(&mut self, column: u16, row: u16) {
        self.state.drag = None;
        let Some(hit) = self.board_hit(column, row) else {
            return;
        };

        self.state.selected_column = hit.status().index();
        match hit {
            BoardHit::Heading(status) => {
                self.state.clear_selection();
                self.open_create(status);
            }
            BoardHit::Card(status, idx) => {
                self.state.selected_card = Some(idx);
                if let Some(card) = self.mutator.board().cards_with_status(status).nth(idx) {
                    debug!(card = %card.id, "drag started");
                    self.state.drag = Some(DragState::new(card.id.clone()));
                }
            }
            BoardHit::Column(_) => self.state.clear_selection(),
        }
    }

    fn handle_drag(&mut self, column: u16, row: u16) {
        if self.state.drag.is_none() {
            return;
        }
        let over = self.board_hit(column, row).map(BoardHit::status);
        if let Some(drag) = self.state.drag.as_mut() {
            drag.moved = true;
            drag.over = over;
        }
    }

    /// Handles a left-button release: finishes a drag or treats a
    /// motionless press as a click on the card.
    fn handle_release(&mut self, column: u16, row: u16) {
        let Some(drag) = self.state.drag.take() else {
            return;
        };

        if !drag.moved {
            if let Some(card) = self.mutator.board().get(&drag.card).cloned() {
                self.open_edit(&card);
            }
            return;
        }

        let Some(target) = self.board_hit(column, row).map(BoardHit::status) else {
            debug!(card = %drag.card, "dropped outside the board");
            return;
        };
        let Some(card) = self.mutator.board().get(&drag.card) else {
            return;
        };
        if card.status != target {
            info!(card = %drag.card, %target, "card dropped");
            self.move_card(&drag.card, target);
        }
    }

    fn handle_modal_press(&mut self, column: u16, row: u16) {
        let layout = modal_layout(self.last_area);
        if !layout.outer.contains(Position::new(column, row)) {
            self.close_modal();
            return;
        }

        let can_delete = self.state.modal.as_ref().is_some_and(CardModal::can_delete);
        match button_at(&layout, can_delete, column, row) {
            Some(ModalButton::Save) => self.save_modal(),
            Some(ModalButton::Cancel) => self.close_modal(),
            Some(ModalButton::Delete) => self.request_delete(),
            None => {
                if let (Some(field), Some(modal)) =
                    (field_at(&layout, column, row), self.state.modal.as_mut())
                {
                    modal.field = field;
                }
            }
        }
    }

    fn highlight(&self) -> BoardHighlight<'_> {
        let drag = self.state.drag.as_ref();
        BoardHighlight {
            selected_column: self.state.selected_column,
            selected_card: self.state.selected_card,
            dragging: drag.filter(|d| d.moved).map(|d| &d.card),
            drag_over: drag.and_then(|d| d.over),
        }
    }

    /// Renders the application to the frame.
    ///
    /// The board is projected afresh from the mutator's collection on every
    /// call.
    ///
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight, hides the header to reclaim space.
    /// - Overlays (card dialog, confirmation, help) are drawn last.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let Some(layout) = screen_layout(area) else {
            self.render_terminal_too_small(frame, area);
            return;
        };

        if let Some(header) = layout.header {
            self.render_header(frame, header);
        }

        let view = BoardView::project(self.mutator.board());
        let mode = self.state.input_mode();
        let buf = frame.buffer_mut();
        render_board(&view, self.highlight(), layout.board, buf);
        render_status_bar(self.state.flash.as_ref(), mode, layout.status_bar, buf);

        if let Some(modal) = &self.state.modal {
            render_card_modal(modal, area, buf);
        }
        if let Some(confirmation) = &self.state.confirm {
            render_confirm_dialog(confirmation.prompt, area, buf);
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function returns once the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_store::{FileStorage, Mutator, Store};
    /// use tack_tui::{App, terminal};
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Mutator::new(Store::new(FileStorage::new("/tmp/tack"))));
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.input_mode())
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "tack",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Kanban Board", Style::default().fg(Color::White)),
            Span::styled(
                format!("  {} cards", self.mutator.board().len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalField;
    use crate::test_utils::buffer_to_string;
    use crate::widgets::modal::button_areas;
    use ratatui::{Terminal, backend::TestBackend};
    use tack_store::{MemoryStorage, STORAGE_KEY, Store};

    const AREA: Rect = Rect::new(0, 0, 90, 24);

    /// Builds an app over in-memory storage holding `cards` (title, status).
    fn app_with(cards: &[(&str, Status)]) -> App<MemoryStorage> {
        let storage = MemoryStorage::new().with_value(STORAGE_KEY, "[]");
        let mut mutator = Mutator::new(Store::new(storage));
        for (title, status) in cards {
            mutator.create_card(title, "", *status).unwrap();
        }
        let mut app = App::new(mutator);
        app.set_area(AREA);
        app
    }

    fn writes(app: &App<MemoryStorage>) -> usize {
        app.mutator.store().storage().writes()
    }

    fn type_text(app: &mut App<MemoryStorage>, text: &str) {
        for ch in text.chars() {
            app.update(Message::ModalInput { ch });
        }
    }

    fn click(app: &mut App<MemoryStorage>, column: u16, row: u16) {
        app.update(Message::MouseDown { column, row });
        app.update(Message::MouseUp { column, row });
    }

    fn drag(app: &mut App<MemoryStorage>, from: (u16, u16), to: (u16, u16)) {
        app.update(Message::MouseDown { column: from.0, row: from.1 });
        app.update(Message::MouseDrag { column: to.0, row: to.1 });
        app.update(Message::MouseUp { column: to.0, row: to.1 });
    }

    fn render(app: &mut App<MemoryStorage>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    // --- Keyboard ---

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = app_with(&[]);
        assert!(!app.should_quit());
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_navigation_updates_state() {
        let mut app = app_with(&[("A", Status::Todo), ("B", Status::Doing)]);

        app.update(Message::NavigateRight);
        assert_eq!(app.state.selected_column, 1);
        app.update(Message::NavigateDown);
        assert_eq!(app.state.selected_card, Some(0));
        app.update(Message::Escape);
        assert_eq!(app.state.selected_card, None);
        app.update(Message::NavigateLeft);
        assert_eq!(app.state.selected_column, 0);
    }

    #[test]
    fn app_help_blocks_navigation() {
        let mut app = app_with(&[]);

        app.update(Message::ToggleHelp);
        app.update(Message::NavigateRight);

        assert!(!app.state.help_visible);
        assert_eq!(app.state.selected_column, 0);
    }

    #[test]
    fn app_quit_works_with_help_visible() {
        let mut app = app_with(&[]);
        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    // --- Card dialog ---

    #[test]
    fn add_card_opens_create_dialog_for_focused_column() {
        let mut app = app_with(&[]);
        app.update(Message::NavigateRight);
        app.update(Message::AddCard);

        let modal = app.state.modal.as_ref().unwrap();
        assert_eq!(modal.mode, ModalMode::Create(Status::Doing));
        assert!(modal.title.is_empty());
        assert!(!modal.can_delete());
    }

    #[test]
    fn save_creates_card_and_persists() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        type_text(&mut app, "Buy milk");
        app.update(Message::ModalNextField);
        type_text(&mut app, "2 litres");
        app.update(Message::ModalSave);

        assert!(app.state.modal.is_none());
        let card = &app.board().cards()[0];
        assert_eq!(card.title, "Buy milk");
        assert_eq!(card.description, "2 litres");
        assert_eq!(card.status, Status::Todo);
        assert_eq!(writes(&app), 1);
        assert_eq!(app.state.selected_card(app.board()).unwrap().id, card.id);
    }

    #[test]
    fn blank_title_refuses_save_and_focuses_title() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        type_text(&mut app, "   ");
        app.update(Message::ModalNextField);
        type_text(&mut app, "details");
        app.update(Message::ModalSave);

        let modal = app.state.modal.as_ref().expect("dialog stays open");
        assert_eq!(modal.field, ModalField::Title);
        assert!(app.board().is_empty());
        assert!(app.state.flash.is_none());
        assert_eq!(writes(&app), 0);
    }

    #[test]
    fn escape_closes_dialog_without_mutation() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        type_text(&mut app, "Draft");
        app.update(Message::Escape);

        assert!(app.state.modal.is_none());
        assert!(app.board().is_empty());
        assert_eq!(writes(&app), 0);
    }

    #[test]
    fn select_opens_prefilled_edit_dialog() {
        let mut app = app_with(&[("Fix login", Status::Doing)]);
        app.update(Message::NavigateRight);
        app.update(Message::NavigateDown);
        app.update(Message::Select);

        let modal = app.state.modal.as_ref().unwrap();
        assert_eq!(modal.heading(), "Edit Card");
        assert_eq!(modal.title, "Fix login");
        assert!(modal.can_delete());

        app.update(Message::ModalBackspace);
        type_text(&mut app, "N");
        app.update(Message::ModalSave);

        assert!(app.state.modal.is_none());
        assert_eq!(app.board().cards()[0].title, "Fix logiN");
        assert_eq!(app.board().cards()[0].status, Status::Doing);
    }

    #[test]
    fn select_without_card_does_nothing() {
        let mut app = app_with(&[]);
        app.update(Message::Select);
        assert!(app.state.modal.is_none());
    }

    #[test]
    fn delete_asks_and_decline_returns_to_dialog() {
        let mut app = app_with(&[("Old", Status::Todo)]);
        app.update(Message::NavigateDown);
        app.update(Message::Select);
        app.update(Message::ModalDelete);

        assert_eq!(app.state.input_mode(), InputMode::Confirm);
        assert_eq!(app.state.confirm.as_ref().unwrap().prompt, DELETE_CARD_PROMPT);

        app.update(Message::Decline);
        assert_eq!(app.state.input_mode(), InputMode::Modal);
        assert_eq!(app.board().len(), 1);

        app.update(Message::ModalDelete);
        app.update(Message::Confirm);
        assert_eq!(app.state.input_mode(), InputMode::Board);
        assert!(app.board().is_empty());
        assert_eq!(app.state.selected_card, None);
    }

    #[test]
    fn delete_is_unavailable_when_creating() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        app.update(Message::ModalDelete);
        assert!(app.state.confirm.is_none());
    }

    // --- Board actions ---

    #[test]
    fn move_keys_follow_the_card() {
        let mut app = app_with(&[("Task", Status::Todo)]);
        app.update(Message::NavigateDown);
        app.update(Message::MoveCardRight);

        assert_eq!(app.board().cards()[0].status, Status::Doing);
        assert_eq!(app.state.selected_column, 1);
        assert_eq!(app.state.selected_card, Some(0));

        app.update(Message::MoveCardRight);
        app.update(Message::MoveCardRight);
        assert_eq!(app.board().cards()[0].status, Status::Done);
        // One write to create the card, then one per move.
        assert_eq!(writes(&app), 4);
    }

    #[test]
    fn clear_all_on_empty_board_does_not_ask() {
        let mut app = app_with(&[]);
        app.update(Message::ClearAll);
        assert!(app.state.confirm.is_none());
    }

    #[test]
    fn clear_all_asks_then_empties() {
        let mut app = app_with(&[("A", Status::Todo), ("B", Status::Done)]);
        app.update(Message::ClearAll);
        assert_eq!(app.state.confirm.as_ref().unwrap().prompt, CLEAR_ALL_PROMPT);

        app.update(Message::Escape);
        assert_eq!(app.board().len(), 2);

        app.update(Message::ClearAll);
        app.update(Message::Confirm);
        assert!(app.board().is_empty());
        assert_eq!(app.mutator.store().storage().value(STORAGE_KEY), Some("[]"));
    }

    #[test]
    fn refresh_reloads_from_storage() {
        let mut app = app_with(&[("A", Status::Todo)]);
        app.mutator
            .store_mut()
            .storage_mut()
            .set(STORAGE_KEY, "[]")
            .unwrap();

        app.update(Message::Refresh);
        assert!(app.board().is_empty());
        assert_eq!(app.state.flash, Some(Flash::Info("Board reloaded".to_string())));
    }

    #[test]
    fn failed_save_keeps_change_and_flashes_error() {
        let mut app = app_with(&[]);
        app.mutator.store_mut().storage_mut().set_fail_writes(true);

        app.update(Message::AddCard);
        type_text(&mut app, "Unsaved");
        app.update(Message::ModalSave);

        assert_eq!(app.board().len(), 1);
        assert!(app.state.modal.is_none());
        assert!(matches!(app.state.flash, Some(Flash::Error(_))));

        let screen = render(&mut app, 90, 24);
        assert!(screen.contains("Could not save board"));
    }

    // --- Mouse ---
    //
    // At 90x24 the header takes rows 0-2, the board rows 3-22 and columns
    // are 30 cells wide. Cards start at row 4, four rows each.

    #[test]
    fn heading_click_opens_create_dialog() {
        let mut app = app_with(&[]);
        click(&mut app, 70, 3);

        let modal = app.state.modal.as_ref().unwrap();
        assert_eq!(modal.mode, ModalMode::Create(Status::Done));
        assert_eq!(app.state.selected_column, 2);
    }

    #[test]
    fn card_click_opens_edit_dialog() {
        let mut app = app_with(&[("First", Status::Todo), ("Second", Status::Todo)]);
        click(&mut app, 5, 9);

        let modal = app.state.modal.as_ref().unwrap();
        assert_eq!(modal.title, "Second");
        assert!(app.state.drag.is_none());
    }

    #[test]
    fn drop_on_other_column_moves_card() {
        let mut app = app_with(&[("Task", Status::Todo)]);
        drag(&mut app, (5, 5), (45, 12));

        assert_eq!(app.board().cards()[0].status, Status::Doing);
        assert_eq!(writes(&app), 2);
        assert!(app.state.drag.is_none());
        assert!(app.state.modal.is_none());
        assert_eq!(app.state.selected_column, 1);
    }

    #[test]
    fn drop_on_same_column_does_not_write() {
        let mut app = app_with(&[("Task", Status::Todo)]);
        drag(&mut app, (5, 5), (20, 15));

        assert_eq!(app.board().cards()[0].status, Status::Todo);
        assert_eq!(writes(&app), 1);
        assert!(app.state.drag.is_none());
    }

    #[test]
    fn drag_marks_target_until_release() {
        let mut app = app_with(&[("Task", Status::Todo)]);
        app.update(Message::MouseDown { column: 5, row: 5 });
        app.update(Message::MouseDrag { column: 75, row: 10 });

        let drag = app.state.drag.as_ref().unwrap();
        assert!(drag.moved);
        assert_eq!(drag.over, Some(Status::Done));

        // Leaving every column clears the target marker.
        app.update(Message::MouseDrag { column: 75, row: 1 });
        assert_eq!(app.state.drag.as_ref().unwrap().over, None);

        app.update(Message::MouseUp { column: 75, row: 1 });
        assert!(app.state.drag.is_none());
        assert_eq!(app.board().cards()[0].status, Status::Todo);
    }

    #[test]
    fn release_under_help_ends_drag() {
        let mut app = app_with(&[("Task", Status::Todo)]);
        app.update(Message::MouseDown { column: 5, row: 5 });
        app.update(Message::MouseDrag { column: 45, row: 12 });
        app.update(Message::ToggleHelp);
        app.update(Message::MouseUp { column: 45, row: 12 });
        assert!(app.state.drag.is_none());

        app.update(Message::Escape);
        click(&mut app, 75, 15);

        assert_eq!(app.board().cards()[0].status, Status::Todo);
        assert_eq!(writes(&app), 1);
    }

    #[test]
    fn release_under_confirmation_ends_drag() {
        let mut app = app_with(&[("Task", Status::Todo)]);
        app.update(Message::MouseDown { column: 5, row: 5 });
        app.update(Message::MouseDrag { column: 45, row: 12 });
        app.update(Message::ClearAll);
        app.update(Message::MouseUp { column: 45, row: 12 });
        assert!(app.state.drag.is_none());

        app.update(Message::Decline);
        click(&mut app, 75, 15);

        assert_eq!(app.board().cards()[0].status, Status::Todo);
        assert_eq!(writes(&app), 1);
    }

    #[test]
    fn press_on_empty_column_discards_leftover_drag() {
        let mut app = app_with(&[("Task", Status::Todo)]);
        let id = app.board().cards()[0].id.clone();
        app.state.drag = Some(DragState {
            card: id,
            moved: true,
            over: Some(Status::Doing),
        });

        click(&mut app, 75, 15);

        assert!(app.state.drag.is_none());
        assert_eq!(app.board().cards()[0].status, Status::Todo);
    }

    #[test]
    fn backdrop_click_closes_dialog() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        type_text(&mut app, "Draft");

        app.update(Message::MouseDown { column: 1, row: 1 });
        assert!(app.state.modal.is_none());
        assert!(app.board().is_empty());
    }

    #[test]
    fn dialog_buttons_are_clickable() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        type_text(&mut app, "Clicked");

        let layout = modal_layout(AREA);
        let (_, save) = button_areas(layout.buttons, false)[0];
        app.update(Message::MouseDown { column: save.x, row: save.y });

        assert!(app.state.modal.is_none());
        assert_eq!(app.board().cards()[0].title, "Clicked");
    }

    #[test]
    fn click_outside_confirmation_declines() {
        let mut app = app_with(&[("A", Status::Todo)]);
        app.update(Message::ClearAll);
        app.update(Message::MouseDown { column: 1, row: 1 });

        assert!(app.state.confirm.is_none());
        assert_eq!(app.board().len(), 1);
    }

    // --- Rendering ---

    #[test]
    fn view_shows_board_with_header() {
        let mut app = app_with(&[("Buy milk", Status::Todo)]);
        let screen = render(&mut app, 90, 24);

        assert!(screen.contains("tack - Kanban Board"));
        assert!(screen.contains("To Do (1)"));
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("Ctrl+C Quit"));
    }

    #[test]
    fn view_hides_header_in_compact_mode() {
        let mut app = app_with(&[]);
        let screen = render(&mut app, 80, 11);

        assert!(!screen.contains("tack - Kanban Board"));
        assert!(screen.contains("To Do (0)"));
    }

    #[test]
    fn view_shows_too_small_message() {
        let mut app = app_with(&[]);
        assert!(render(&mut app, 80, 8).contains("Terminal too small"));
        assert!(render(&mut app, 30, 24).contains("Terminal too small"));
    }

    #[test]
    fn view_draws_dialog_over_board() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        let screen = render(&mut app, 90, 24);

        assert!(screen.contains("Add Card"));
        assert!(screen.contains("Ctrl+S Save"));
    }
}
