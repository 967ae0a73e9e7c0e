//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions and the split
//! of the screen into header, board and status bar. Rendering and mouse
//! hit-testing both go through [`screen_layout`], so a click always lands on
//! what was drawn.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each card in rows.
///
/// This includes the border (2 rows) and content (title and one line of
/// description).
pub const CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The card
/// dialog is the tallest element and still fits, clamped, at this size.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 3 columns; each needs at least 13 characters for borders,
/// the count badge and truncated titles to be readable.
pub const MIN_WIDTH: u16 = 40;

/// How the screen is divided for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The header bar, hidden on short terminals.
    pub header: Option<Rect>,
    /// The three board columns.
    pub board: Rect,
    /// The single-row status bar.
    pub status_bar: Rect,
}

/// Splits the terminal area into header, board and status bar.
///
/// Returns `None` when the area is below [`MIN_WIDTH`] x [`MIN_HEIGHT`].
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use tack_tui::layout::{HEADER_HEIGHT, screen_layout};
///
/// let layout = screen_layout(Rect::new(0, 0, 80, 24)).unwrap();
/// assert_eq!(layout.board.y, HEADER_HEIGHT);
/// assert_eq!(layout.status_bar.y, 23);
///
/// assert!(screen_layout(Rect::new(0, 0, 30, 24)).is_none());
/// ```
#[must_use]
pub fn screen_layout(area: Rect) -> Option<ScreenLayout> {
    if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
        return None;
    }

    if area.height >= MIN_HEIGHT_WITH_HEADER {
        let [header, board, status_bar] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);
        Some(ScreenLayout {
            header: Some(header),
            board,
            status_bar,
        })
    } else {
        let [board, status_bar] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(area);
        Some(ScreenLayout {
            header: None,
            board,
            status_bar,
        })
    }
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
