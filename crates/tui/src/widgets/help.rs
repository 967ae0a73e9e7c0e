//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 42;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 28;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area behind it first.
///
/// # Layout
///
/// ```text
/// ╭ Help ──────────────────────────────────╮
/// │                                        │
/// │  Board                                 │
/// │  ← →          Focus column             │
/// │  ↑ ↓          Select card              │
/// │  Shift+← →    Move card                │
/// │  ...                                   │
/// │                                        │
/// │  Card dialog                           │
/// │  Ctrl+S       Save                     │
/// │  ...                                   │
/// │                                        │
/// │  Press any key to close                │
/// ╰────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let binding = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<13}"), key_style),
            Span::styled(text, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Board", header_style)),
        binding("← →", "Focus column"),
        binding("↑ ↓", "Select card"),
        binding("Shift+← →", "Move card"),
        binding("< >", "Move card"),
        binding("Enter", "Edit card"),
        binding("a", "Add card"),
        binding("X", "Clear all cards"),
        binding("r", "Reload board"),
        binding("Esc", "Clear selection"),
        binding("?", "Toggle help"),
        binding("Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Card dialog", header_style)),
        binding("Ctrl+S", "Save"),
        binding("Ctrl+D", "Delete card"),
        binding("Tab", "Switch field"),
        binding("Esc", "Cancel"),
        Line::from(""),
        Line::from(Span::styled("  Mouse", header_style)),
        binding("[+]", "Add card"),
        binding("Click card", "Edit card"),
        binding("Drag card", "Move to column"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}
