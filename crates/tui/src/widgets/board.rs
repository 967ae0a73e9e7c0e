//! Kanban board rendering widget.
//!
//! This module provides functions for rendering the complete board with its
//! three columns arranged horizontally, and for mapping a screen position
//! back to what was drawn there.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use tack_protocol::{CardId, Status};

use super::column::{ColumnHighlight, ColumnPosition, card_index_at, column_inner, render_column};
use crate::view::BoardView;

/// Selection and drag markers drawn on top of the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardHighlight<'a> {
    /// Index of the focused column (0-2).
    pub selected_column: usize,
    /// Index of the selected card within the focused column, if any.
    pub selected_card: Option<usize>,
    /// The card being dragged.
    pub dragging: Option<&'a CardId>,
    /// The column a drag is hovering over.
    pub drag_over: Option<Status>,
}

impl BoardHighlight<'_> {
    fn selection_in(&self, index: usize) -> Option<usize> {
        if self.selected_column == index {
            self.selected_card
        } else {
            None
        }
    }
}

/// What lies under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardHit {
    /// The heading row of a column, which holds the add affordance.
    Heading(Status),
    /// The card at this index within its column.
    Card(Status, usize),
    /// Anywhere else inside a column.
    Column(Status),
}

impl BoardHit {
    /// Returns the column that was hit.
    #[must_use]
    pub fn status(self) -> Status {
        match self {
            Self::Heading(status) | Self::Card(status, _) | Self::Column(status) => status,
        }
    }
}

/// Splits the board area into three equal-width columns.
#[must_use]
pub fn column_areas(area: Rect) -> [Rect; 3] {
    Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area)
}

/// Renders the complete board to the buffer.
///
/// The board displays three columns (To Do, Doing, Done) arranged
/// horizontally with equal widths and collapsed borders.
///
/// # Layout
///
/// ```text
/// ╭ To Do (2) ─[+]┬ Doing (1) ─[+]┬ Done (0) ──[+]╮
/// │ Card 1        │ Card 3        │ No cards      │
/// │ Card 2        │               │               │
/// ╰───────────────┴───────────────┴───────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::{Board, Status};
/// use tack_tui::view::BoardView;
/// use tack_tui::widgets::{BoardHighlight, render_board};
///
/// let mut board = Board::new();
/// board.create_card("Card 1", "Description", Status::Todo);
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&BoardView::project(&board), BoardHighlight::default(), area, &mut buf);
/// ```
pub fn render_board(view: &BoardView, highlight: BoardHighlight<'_>, area: Rect, buf: &mut Buffer) {
    let areas = column_areas(area);
    let count = view.columns.len();

    for (i, column) in view.columns.iter().enumerate() {
        let column_highlight = ColumnHighlight {
            focused: highlight.selected_column == i,
            prev_focused: i > 0 && highlight.selected_column == i - 1,
            selected: highlight.selection_in(i),
            dragging: highlight.dragging,
            drag_over: highlight.drag_over == Some(column.status),
        };
        render_column(column, column_highlight, ColumnPosition::of(i, count), areas[i], buf);
    }
}

/// Returns what [`render_board`] drew at `(x, y)`, if anything.
///
/// Uses the same layout as rendering, including the scroll offset of the
/// focused column, so a click always lands on the card it visually hits.
#[must_use]
pub fn hit_test(
    view: &BoardView,
    highlight: BoardHighlight<'_>,
    area: Rect,
    x: u16,
    y: u16,
) -> Option<BoardHit> {
    let areas = column_areas(area);
    let count = view.columns.len();

    let (i, column_area) = areas
        .iter()
        .enumerate()
        .find(|(_, a)| a.contains((x, y).into()))?;
    let column = &view.columns[i];

    if y == column_area.y {
        return Some(BoardHit::Heading(column.status));
    }

    let inner = column_inner(*column_area, ColumnPosition::of(i, count));
    let hit = match card_index_at(inner, column.cards.len(), highlight.selection_in(i), x, y) {
        Some(idx) => BoardHit::Card(column.status, idx),
        None => BoardHit::Column(column.status),
    };
    Some(hit)
}
