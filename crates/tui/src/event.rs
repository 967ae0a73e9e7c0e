//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Which key map applies depends on the
//! [`InputMode`]: the board, the card dialog, or a confirmation.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tack_protocol::Message;

use crate::state::InputMode;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action in `mode`,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
            InputMode::Board => key_to_message(*key),
            InputMode::Modal => key_to_modal_message(*key),
            InputMode::Confirm => key_to_confirm_message(*key),
        },
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button is handled: press, drag and release map to the
/// three pointer messages.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::MouseDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::MouseDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::MouseUp { column, row }),
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Converts a terminal key event to a board message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (close help or clear selection) |
/// | `Left` / `Right` | Focus previous / next column |
/// | `Up` / `Down` | Select previous / next card |
/// | `Shift+Left` or `<` | Move card one column left |
/// | `Shift+Right` or `>` | Move card one column right |
/// | `Enter` or `Space` | Edit selected card |
/// | `a` | Add card to the focused column |
/// | `X` | Clear all cards |
/// | `r` | Reload from storage |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    // Moves are checked before plain arrows, which would otherwise match
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Left => return Some(Message::MoveCardLeft),
            KeyCode::Right => return Some(Message::MoveCardRight),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('<') => Some(Message::MoveCardLeft),
        KeyCode::Char('>') => Some(Message::MoveCardRight),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        KeyCode::Char('a') => Some(Message::AddCard),
        KeyCode::Char('X') => Some(Message::ClearAll),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a card dialog message.
///
/// # Key Bindings (Card Dialog)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+S` or `Ctrl+Enter` | Save |
/// | `Ctrl+J` | Save (what `Ctrl+Enter` sends without keyboard enhancement) |
/// | `Ctrl+D` | Delete (edit mode only) |
/// | `Esc` | Cancel |
/// | `Tab` / `Shift+Tab` | Next / previous field |
/// | `Enter` | Line break in the description |
/// | `Backspace` | Delete last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_modal_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(&key, 's') || is_ctrl(&key, 'j') {
        return Some(Message::ModalSave);
    }
    if is_ctrl(&key, 'd') {
        return Some(Message::ModalDelete);
    }

    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::ModalSave)
        }
        KeyCode::Enter => Some(Message::ModalNewline),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::ModalNextField),
        KeyCode::BackTab => Some(Message::ModalPrevField),
        KeyCode::Backspace => Some(Message::ModalBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::ModalInput { ch })
        }
        _ => None,
    }
}

/// Converts a key event to a confirmation answer.
///
/// `y` or `Enter` confirms; `n` or `Esc` declines.
#[must_use]
pub fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::Confirm),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::Decline),
        _ => None,
    }
}
