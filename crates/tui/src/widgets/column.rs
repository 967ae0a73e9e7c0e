//! Column rendering widget.
//!
//! This module provides functions for rendering a single status column
//! with its heading, add affordance and card list. Card placement is
//! computed by [`visible_cards`], which mouse hit-testing reuses.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tack_protocol::CardId;

use super::card::{CardStyle, render_card};
use crate::layout::CARD_HEIGHT;
use crate::view::ColumnView;

/// The add-card affordance shown at the right of each heading.
pub const ADD_LABEL: &str = "[+]";

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// First (leftmost) column - has left border with rounded corners.
    First,
    /// Middle column - has left border with T-connectors.
    Middle,
    /// Last (rightmost) column - T-connectors on left, rounded on right.
    Last,
}

impl ColumnPosition {
    /// Returns the position of column `index` out of `count`.
    #[must_use]
    pub fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the middle column: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// How a column is highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnHighlight<'a> {
    /// The column has keyboard focus.
    pub focused: bool,
    /// The column on the left has focus; the shared border is colored.
    pub prev_focused: bool,
    /// Index of the selected card, only set for the focused column.
    pub selected: Option<usize>,
    /// The card being dragged, wherever it lives.
    pub dragging: Option<&'a CardId>,
    /// A drag is hovering over this column.
    pub drag_over: bool,
}

fn column_block<'a>(position: ColumnPosition) -> Block<'a> {
    // Collapse borders between adjacent columns: only the last one draws
    // its right edge.
    let (borders, border_set) = match position {
        ColumnPosition::First => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_FIRST),
        ColumnPosition::Middle => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_MIDDLE),
        ColumnPosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };
    Block::default().borders(borders).border_set(border_set)
}

/// Returns the area inside the column's borders, where cards are placed.
#[must_use]
pub fn column_inner(area: Rect, position: ColumnPosition) -> Rect {
    column_block(position).inner(area)
}

/// Renders a single column to the buffer.
///
/// A column displays its heading with the count badge and the add
/// affordance, followed by a vertical list of cards. Empty columns show a
/// "No cards" placeholder.
///
/// # Layout
///
/// ```text
/// ╭ To Do (2) ─────[+]┬
/// │╭────────────────╮ │
/// ││ Card 1         │ │
/// ││ desc...        │ │
/// │╰────────────────╯ │
/// ╰───────────────────┴
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::{Board, Status};
/// use tack_tui::view::BoardView;
/// use tack_tui::widgets::{ColumnHighlight, ColumnPosition, render_column};
///
/// let mut board = Board::new();
/// board.create_card("Card 1", "Description", Status::Todo);
/// let view = BoardView::project(&board);
///
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
///
/// render_column(
///     view.column(Status::Todo),
///     ColumnHighlight { focused: true, selected: Some(0), ..Default::default() },
///     ColumnPosition::First,
///     area,
///     &mut buf,
/// );
/// ```
pub fn render_column(
    column: &ColumnView,
    highlight: ColumnHighlight<'_>,
    position: ColumnPosition,
    area: Rect,
    buf: &mut Buffer,
) {
    let accent = if highlight.drag_over {
        Some(Color::Yellow)
    } else if highlight.focused {
        Some(Color::Cyan)
    } else {
        None
    };

    let border_style = Style::default().fg(accent.unwrap_or(Color::DarkGray));
    let title_style = match accent {
        Some(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    };

    let block = column_block(position)
        .title(Span::styled(format!(" {} ", column.heading()), title_style))
        .title(Line::from(Span::styled(ADD_LABEL, Style::default().fg(Color::Green))).right_aligned())
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The shared left border belongs to this block, so recolor it when the
    // column on the left has focus.
    if highlight.prev_focused && accent.is_none() && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    for (idx, card_area) in visible_cards(inner_area, column.cards.len(), highlight.selected) {
        let card = &column.cards[idx];
        let style = CardStyle {
            selected: highlight.focused && highlight.selected == Some(idx),
            dragging: highlight.dragging == Some(&card.id),
        };
        render_card(card, column.status, style, card_area, buf);
    }
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No cards",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Returns the index and area of every card drawn in `inner`.
///
/// Cards are stacked [`CARD_HEIGHT`] rows apart, scrolled so the selected
/// card stays visible.
#[must_use]
pub fn visible_cards(inner: Rect, total: usize, selected_idx: Option<usize>) -> Vec<(usize, Rect)> {
    if inner.is_empty() || total == 0 {
        return Vec::new();
    }

    let visible = usize::from((inner.height / CARD_HEIGHT).max(1));
    let offset = calculate_scroll_offset(selected_idx, total, visible);

    (offset..total)
        .take(visible)
        .enumerate()
        .map_while(|(slot, idx)| {
            let y = inner.y + u16::try_from(slot).ok()? * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
            (height > 0).then(|| (idx, Rect::new(inner.x, y, inner.width, height)))
        })
        .collect()
}

/// Returns the index of the card drawn at `(column, row)`, if any.
#[must_use]
pub fn card_index_at(
    inner: Rect,
    total: usize,
    selected_idx: Option<usize>,
    column: u16,
    row: u16,
) -> Option<usize> {
    visible_cards(inner, total, selected_idx)
        .into_iter()
        .find(|(_, area)| area.contains((column, row).into()))
        .map(|(idx, _)| idx)
}

/// Calculates the scroll offset to keep the selected card visible.
fn calculate_scroll_offset(selected_idx: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);

    if selected < visible / 2 {
        0
    } else {
        (selected.saturating_sub(visible / 2)).min(max_offset)
    }
}
