//! The collection shown on first launch.
//!
//! When storage holds no usable board the application starts with a single
//! example card instead of an empty screen.

use chrono::{DateTime, Utc};

use crate::board::Board;
use crate::card::{Card, CardId, Status};

/// Identifier of the seed card.
pub const SEED_CARD_ID: &str = "card-addigy-1";

/// Builds the default board, stamping the seed card with `now`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tack_protocol::{Status, seed::seed_board};
///
/// let board = seed_board(Utc::now());
/// assert_eq!(board.len(), 1);
/// assert_eq!(board.cards()[0].status, Status::Todo);
/// ```
#[must_use]
pub fn seed_board(now: DateTime<Utc>) -> Board {
    Board::from_cards(vec![Card::new(
        CardId::new(SEED_CARD_ID),
        "Fix Addigy ADE tokens",
        "Apple Business Manager connectivity disabled. Affected policies: SEandI, VLC, DGN, \
         Robin Rains Interiors. See: \
         https://support.addigy.com/support/solutions/articles/8000081475",
        Status::Todo,
        now,
    )])
}
