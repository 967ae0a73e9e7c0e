//! Add Card / Edit Card dialog.
//!
//! The dialog is drawn centered over the board. [`modal_layout`] is shared
//! with mouse handling so clicks on fields, buttons and the backdrop line
//! up with what is drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;
use crate::state::{CardModal, ModalField};
use crate::view::{sanitize_line, sanitize_text};

/// The width of the dialog.
const MODAL_WIDTH: u16 = 60;

/// The height of the dialog.
const MODAL_HEIGHT: u16 = 16;

/// Drawn after the text of the focused field.
const CURSOR: &str = "█";

/// A clickable button in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalButton {
    /// Validate and save.
    Save,
    /// Close without saving.
    Cancel,
    /// Delete the edited card.
    Delete,
}

impl ModalButton {
    fn label(self) -> &'static str {
        match self {
            Self::Save => "[ Save ]",
            Self::Cancel => "[ Cancel ]",
            Self::Delete => "[ Delete ]",
        }
    }
}

/// Where each part of the dialog is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// The whole dialog; clicks outside it hit the backdrop.
    pub outer: Rect,
    /// The title input box.
    pub title: Rect,
    /// The description input box.
    pub description: Rect,
    /// The row holding the buttons.
    pub buttons: Rect,
    /// The row holding the key hints.
    pub hints: Rect,
}

/// Computes the dialog layout centered within `area`.
#[must_use]
pub fn modal_layout(area: Rect) -> ModalLayout {
    let outer = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    let inner = Block::default().borders(Borders::ALL).inner(outer);

    let [_, title, _, description, buttons, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    ModalLayout {
        outer,
        title,
        description,
        buttons,
        hints,
    }
}

/// Returns the buttons shown for this dialog and where they are drawn.
#[must_use]
pub fn button_areas(row: Rect, can_delete: bool) -> Vec<(ModalButton, Rect)> {
    let buttons: &[ModalButton] = if can_delete {
        &[ModalButton::Save, ModalButton::Cancel, ModalButton::Delete]
    } else {
        &[ModalButton::Save, ModalButton::Cancel]
    };

    let mut x = row.x.saturating_add(1);
    let mut areas = Vec::with_capacity(buttons.len());
    for &button in buttons {
        let width = u16::try_from(button.label().chars().count()).unwrap_or(u16::MAX);
        let area = Rect::new(x, row.y, width, row.height).intersection(row);
        areas.push((button, area));
        x = x.saturating_add(width + 2);
    }
    areas
}

/// Returns the field whose input box contains `(x, y)`.
#[must_use]
pub fn field_at(layout: &ModalLayout, x: u16, y: u16) -> Option<ModalField> {
    let pos = (x, y).into();
    if layout.title.contains(pos) {
        Some(ModalField::Title)
    } else if layout.description.contains(pos) {
        Some(ModalField::Description)
    } else {
        None
    }
}

/// Returns the button at `(x, y)`, if any.
#[must_use]
pub fn button_at(layout: &ModalLayout, can_delete: bool, x: u16, y: u16) -> Option<ModalButton> {
    button_areas(layout.buttons, can_delete)
        .into_iter()
        .find(|(_, area)| area.contains((x, y).into()))
        .map(|(button, _)| button)
}

/// Renders the card dialog centered within `area`.
///
/// # Layout
///
/// ```text
/// ╭ Add Card ─────────────────────────────╮
/// │ Title                                 │
/// │╭─────────────────────────────────────╮│
/// ││Buy milk█                            ││
/// │╰─────────────────────────────────────╯│
/// │ Description                           │
/// │╭─────────────────────────────────────╮│
/// ││                                     ││
/// │╰─────────────────────────────────────╯│
/// │ [ Save ]  [ Cancel ]                  │
/// │ Ctrl+S save  Tab switch  Esc cancel   │
/// ╰───────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::Status;
/// use tack_tui::state::CardModal;
/// use tack_tui::widgets::render_card_modal;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_card_modal(&CardModal::create(Status::Todo), area, &mut buf);
/// ```
pub fn render_card_modal(modal: &CardModal, area: Rect, buf: &mut Buffer) {
    let layout = modal_layout(area);

    Clear.render(layout.outer, buf);

    let accent = Color::LightCyan;
    Block::default()
        .title(Span::styled(
            format!(" {} ", modal.heading()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .render(layout.outer, buf);

    let label_style = Style::default().fg(Color::Yellow);
    let label = |area: Rect| {
        Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_sub(1),
            area.width.saturating_sub(1),
            1,
        )
    };
    Paragraph::new(Span::styled("Title", label_style)).render(label(layout.title), buf);
    Paragraph::new(Span::styled("Description", label_style)).render(label(layout.description), buf);

    let title_focused = modal.field == ModalField::Title;
    render_input(
        Text::from(tail(&sanitize_line(&modal.title), layout.title.width.saturating_sub(3))),
        title_focused,
        layout.title,
        buf,
    );
    render_input(
        Text::from(sanitize_text(&modal.description)),
        !title_focused,
        layout.description,
        buf,
    );

    let mut spans = Vec::new();
    for (button, _) in button_areas(layout.buttons, modal.can_delete()) {
        let color = match button {
            ModalButton::Save => Color::Green,
            ModalButton::Cancel => Color::White,
            ModalButton::Delete => Color::Red,
        };
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(button.label(), Style::default().fg(color)));
    }
    spans.insert(0, Span::raw(" "));
    Paragraph::new(Line::from(spans)).render(layout.buttons, buf);

    let key_style = Style::default().fg(Color::Yellow);
    let hint_style = Style::default().fg(Color::DarkGray);
    let mut hints = vec![
        Span::raw(" "),
        Span::styled("Ctrl+S", key_style),
        Span::styled(" save  ", hint_style),
        Span::styled("Tab", key_style),
        Span::styled(" switch  ", hint_style),
        Span::styled("Esc", key_style),
        Span::styled(" cancel", hint_style),
    ];
    if modal.can_delete() {
        hints.push(Span::styled("  ", hint_style));
        hints.push(Span::styled("Ctrl+D", key_style));
        hints.push(Span::styled(" delete", hint_style));
    }
    Paragraph::new(Line::from(hints)).render(layout.hints, buf);
}

/// Draws one input box, with a cursor after the text when focused.
fn render_input(mut text: Text<'_>, focused: bool, area: Rect, buf: &mut Buffer) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    if focused {
        let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));
        match text.lines.last_mut() {
            Some(line) => line.spans.push(cursor),
            None => text.lines.push(Line::from(cursor)),
        }
    }

    // Keep the last lines visible when the text outgrows the box.
    let visible = area.height.saturating_sub(2);
    let total = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
    let scroll = total.saturating_sub(visible);

    Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}

/// Keeps the last `width` characters of `text`.
fn tail(text: &str, width: u16) -> String {
    let count = text.chars().count();
    let skip = count.saturating_sub(usize::from(width));
    text.chars().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use tack_protocol::{Card, CardId, Status};

    fn edit_modal() -> CardModal {
        let card = Card::new(
            CardId::new("card-1"),
            "Fix login",
            "Users see a blank page",
            Status::Doing,
            chrono::Utc::now(),
        );
        CardModal::edit(&card)
    }

    #[test]
    fn render_create_modal() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_card_modal(&CardModal::create(Status::Todo), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Add Card"));
        assert!(content.contains("Title"));
        assert!(content.contains("Description"));
        assert!(content.contains("[ Save ]"));
        assert!(!content.contains("[ Delete ]"));
    }

    #[test]
    fn render_edit_modal_prefilled() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_card_modal(&edit_modal(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Edit Card"));
        assert!(content.contains("Fix login█"));
        assert!(content.contains("Users see a blank page"));
        assert!(content.contains("[ Delete ]"));
    }

    #[test]
    fn render_modal_sanitizes_input() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let mut modal = CardModal::create(Status::Todo);
        modal.title = "bad\x1b[2J".to_string();

        render_card_modal(&modal, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("bad\u{241b}[2J"));
        assert!(!content.contains('\x1b'));
    }

    #[test]
    fn long_title_shows_its_end() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("ab", 3), "ab");
    }

    #[test]
    fn layout_is_centered() {
        let layout = modal_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.outer, Rect::new(10, 4, 60, 16));
        assert_eq!(layout.title, Rect::new(11, 6, 58, 3));
        assert_eq!(layout.description.y, 10);
        assert_eq!(layout.hints.y, 18);
    }

    #[test]
    fn hit_fields_and_buttons() {
        let layout = modal_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(field_at(&layout, 20, 7), Some(ModalField::Title));
        assert_eq!(field_at(&layout, 20, 12), Some(ModalField::Description));
        assert_eq!(field_at(&layout, 20, 17), None);

        let y = layout.buttons.y;
        let x = layout.buttons.x;
        assert_eq!(button_at(&layout, false, x + 2, y), Some(ModalButton::Save));
        assert_eq!(button_at(&layout, false, x + 12, y), Some(ModalButton::Cancel));
        assert_eq!(button_at(&layout, false, x + 24, y), None);
        assert_eq!(button_at(&layout, true, x + 24, y), Some(ModalButton::Delete));
    }

    #[test]
    fn render_modal_handles_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_card_modal(&edit_modal(), area, &mut buf);
    }
}
