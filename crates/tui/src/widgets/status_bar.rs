//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar
//! with keybinding hints and the latest flash message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::{Flash, InputMode};
use crate::view::sanitize_line;

/// Returns the keybinding hints for the given input mode.
fn hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Board => &[
            ("Ctrl+C", "Quit"),
            ("a", "Add"),
            ("Enter", "Edit"),
            ("Shift+←→", "Move"),
            ("X", "Clear"),
            ("?", "Help"),
        ],
        InputMode::Modal => &[
            ("Ctrl+S", "Save"),
            ("Tab", "Field"),
            ("Esc", "Cancel"),
        ],
        InputMode::Confirm => &[("y", "Yes"), ("n", "No")],
    }
}

/// Renders the one-row status bar.
///
/// A flash message, if any, is shown first; errors are drawn in red.
///
/// # Layout
///
/// ```text
/// ✗ Could not save board  Ctrl+C Quit  a Add  Enter Edit  ...
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_tui::state::InputMode;
/// use tack_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(None, InputMode::Board, area, &mut buf);
/// ```
pub fn render_status_bar(flash: Option<&Flash>, mode: InputMode, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    match flash {
        Some(Flash::Error(text)) => {
            spans.push(Span::styled(
                format!("✗ {}", sanitize_line(text)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("  "));
        }
        Some(Flash::Info(text)) => {
            spans.push(Span::styled(sanitize_line(text), Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("  "));
        }
        None => {}
    }

    for (key, text) in hints(mode) {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {text}  "), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
