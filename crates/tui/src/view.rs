//! Pure projection of the board onto columns.
//!
//! [`BoardView::project`] rebuilds every column from scratch on each call:
//! one [`CardView`] per card, in collection order, with text made safe for
//! the terminal and a count badge per column. Widgets only ever draw a
//! `BoardView`, never a [`Board`] directly.

use tack_protocol::{Board, Card, CardId, Status};

/// A card as it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Identifier of the projected card.
    pub id: CardId,
    /// Sanitized title.
    pub title: String,
    /// Sanitized description; line breaks are kept.
    pub description: String,
}

impl CardView {
    /// Projects a single card.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            title: sanitize_line(&card.title),
            description: sanitize_text(&card.description),
        }
    }

    /// Returns the first line of the description.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or("")
    }
}

/// One status column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Status shared by every card in the column.
    pub status: Status,
    /// Number of cards with this status.
    pub count: usize,
    /// Cards in collection order.
    pub cards: Vec<CardView>,
}

impl ColumnView {
    /// Returns the column heading with its count badge, e.g. `To Do (2)`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} ({})", self.status.display_name(), self.count)
    }

    /// Returns `true` if the column has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The whole board, ready to draw.
///
/// # Examples
///
/// ```
/// use tack_protocol::{Board, Status};
/// use tack_tui::view::BoardView;
///
/// let mut board = Board::new();
/// board.create_card("<b>bold</b>", "", Status::Doing);
///
/// let view = BoardView::project(&board);
/// let doing = view.column(Status::Doing);
/// assert_eq!(doing.count, 1);
/// assert_eq!(doing.cards[0].title, "<b>bold</b>");
/// assert_eq!(view.column(Status::Todo).heading(), "To Do (0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Columns in display order: todo, doing, done.
    pub columns: [ColumnView; 3],
}

impl BoardView {
    /// Projects `board` onto its three columns.
    #[must_use]
    pub fn project(board: &Board) -> Self {
        let columns = Status::all().map(|status| {
            let cards: Vec<CardView> = board
                .cards_with_status(status)
                .map(CardView::from_card)
                .collect();
            ColumnView {
                status,
                count: cards.len(),
                cards,
            }
        });
        Self { columns }
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: Status) -> &ColumnView {
        &self.columns[status.index()]
    }
}

/// Makes single-line text safe to write to the terminal.
///
/// Every C0 control character becomes its Unicode control picture
/// (`\x1b` shows as `␛`), DEL becomes `␡` and C1 controls become U+FFFD.
/// Everything else, markup included, is kept as-is.
///
/// # Examples
///
/// ```
/// use tack_tui::view::sanitize_line;
///
/// assert_eq!(sanitize_line("<script>alert(1)</script>"), "<script>alert(1)</script>");
/// assert_eq!(sanitize_line("red\x1b[31m"), "red\u{241b}[31m");
/// assert_eq!(sanitize_line("a\nb"), "a\u{2424}b");
/// ```
#[must_use]
pub fn sanitize_line(text: &str) -> String {
    text.chars().map(visible_char).collect()
}

/// Like [`sanitize_line`], but keeps line breaks and expands tabs.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push('\n'),
            '\t' => out.push_str("    "),
            '\r' => {}
            other => out.push(visible_char(other)),
        }
    }
    out
}

fn visible_char(ch: char) -> char {
    match ch {
        '\u{0}'..='\u{1f}' => char::from_u32(0x2400 + ch as u32).unwrap_or('\u{fffd}'),
        '\u{7f}' => '\u{2421}',
        '\u{80}'..='\u{9f}' => '\u{fffd}',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn board_with(cards: &[(&str, Status)]) -> Board {
        let mut board = Board::new();
        for (i, (title, status)) in cards.iter().enumerate() {
            let at = Utc.timestamp_millis_opt(i as i64).unwrap();
            board.create_card_at(title, "", *status, at);
        }
        board
    }

    #[test]
    fn project_groups_by_status_in_collection_order() {
        let board = board_with(&[
            ("A", Status::Todo),
            ("B", Status::Done),
            ("C", Status::Todo),
            ("D", Status::Doing),
        ]);

        let view = BoardView::project(&board);
        let titles = |status| -> Vec<&str> {
            view.column(status)
                .cards
                .iter()
                .map(|c| c.title.as_str())
                .collect()
        };

        assert_eq!(titles(Status::Todo), vec!["A", "C"]);
        assert_eq!(titles(Status::Doing), vec!["D"]);
        assert_eq!(titles(Status::Done), vec!["B"]);
    }

    #[test]
    fn count_badges_match_cards() {
        let board = board_with(&[("A", Status::Todo), ("B", Status::Todo)]);
        let view = BoardView::project(&board);

        assert_eq!(view.column(Status::Todo).count, 2);
        assert_eq!(view.column(Status::Doing).count, 0);
        assert_eq!(view.column(Status::Todo).heading(), "To Do (2)");
        assert!(view.column(Status::Done).is_empty());
    }

    #[test]
    fn project_does_not_touch_the_board() {
        let board = board_with(&[("A", Status::Todo)]);
        let before = board.clone();
        let _ = BoardView::project(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn markup_is_kept_literal() {
        let board = board_with(&[("<script>alert(1)</script>", Status::Todo)]);
        let view = BoardView::project(&board);
        assert_eq!(view.columns[0].cards[0].title, "<script>alert(1)</script>");
    }

    #[test]
    fn control_characters_are_replaced() {
        assert_eq!(sanitize_line("\x07bell"), "\u{2407}bell");
        assert_eq!(sanitize_line("del\x7f"), "del\u{2421}");
        assert_eq!(sanitize_line("c1\u{9b}31m"), "c1\u{fffd}31m");
        assert_eq!(sanitize_line("naïve ✓"), "naïve ✓");
    }

    #[test]
    fn sanitize_text_keeps_line_breaks() {
        assert_eq!(sanitize_text("one\r\ntwo\tend\x1b"), "one\ntwo    end\u{241b}");
    }

    #[test]
    fn summary_is_first_description_line() {
        let card = Card::new(
            CardId::new("card-1"),
            "T",
            "first\nsecond",
            Status::Todo,
            Utc::now(),
        );
        assert_eq!(CardView::from_card(&card).summary(), "first");
    }
}
