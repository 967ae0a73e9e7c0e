//! Card rendering widget.
//!
//! This module provides functions for rendering individual cards with
//! color coding based on the column they sit in.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tack_protocol::Status;

use crate::view::CardView;

/// Returns the color associated with a status.
///
/// - `Todo`: Blue
/// - `Doing`: Yellow
/// - `Done`: Green
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use tack_protocol::Status;
/// use tack_tui::widgets::status_color;
///
/// assert_eq!(status_color(Status::Todo), Color::Blue);
/// assert_eq!(status_color(Status::Doing), Color::Yellow);
/// assert_eq!(status_color(Status::Done), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => Color::Blue,
        Status::Doing => Color::Yellow,
        Status::Done => Color::Green,
    }
}

/// Returns a brighter version of the status color for selected cards.
#[must_use]
const fn status_color_bright(status: Status) -> Color {
    match status {
        Status::Todo => Color::LightBlue,
        Status::Doing => Color::LightYellow,
        Status::Done => Color::LightGreen,
    }
}

/// How a card is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardStyle {
    /// The card has keyboard selection.
    pub selected: bool,
    /// The card is being dragged.
    pub dragging: bool,
}

/// Renders a card to the buffer.
///
/// The card displays the title and the first line of the description,
/// truncated to fit, within a bordered box. The border color reflects the
/// card's column. A dragged card is drawn dimmed with a square border.
///
/// # Layout
///
/// ```text
/// ╭────────────────╮
/// │ Title          │
/// │ description... │
/// ╰────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::{Card, CardId, Status};
/// use tack_tui::view::CardView;
/// use tack_tui::widgets::{CardStyle, render_card};
///
/// let card = Card::new(CardId::new("card-1"), "Ship it", "Tag the release", Status::Doing, Utc::now());
/// let area = Rect::new(0, 0, 20, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_card(&CardView::from_card(&card), Status::Doing, CardStyle::default(), area, &mut buf);
/// ```
pub fn render_card(card: &CardView, status: Status, style: CardStyle, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style, desc_style) = if style.selected {
        (
            status_color_bright(status),
            Style::default()
                .fg(status_color_bright(status))
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            status_color(status),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let (border_type, extra) = if style.dragging {
        (BorderType::Plain, Modifier::DIM)
    } else {
        (BorderType::Rounded, Modifier::empty())
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let title = truncate_string(&card.title, inner_width);
    let summary = truncate_string(card.summary(), inner_width);

    let content = vec![
        Line::from(Span::styled(title, title_style.add_modifier(extra))),
        Line::from(Span::styled(summary, desc_style.add_modifier(extra))),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color).add_modifier(extra)),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
