//! Card-related types for the kanban board.
//!
//! This module defines the card identifier, the three workflow statuses and
//! the card record itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Generated identifiers have the form `card-<unix-millis>`, but any string
/// read back from storage is accepted verbatim.
///
/// # Examples
///
/// ```
/// use tack_protocol::CardId;
///
/// let id = CardId::from_millis(1_700_000_000_000);
/// assert_eq!(id.as_str(), "card-1700000000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates an identifier from an arbitrary string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a time-derived identifier from a Unix timestamp in milliseconds.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("card-{millis}"))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The workflow status of a card, which is also the column it is shown in.
///
/// The order reflects the progression of work from left to right.
///
/// # Examples
///
/// ```
/// use tack_protocol::Status;
///
/// let status = Status::Doing;
/// assert_eq!(status.display_name(), "Doing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Work that has not been started.
    #[default]
    Todo,
    /// Work in progress.
    Doing,
    /// Finished work.
    Done,
}

impl Status {
    /// Returns all statuses in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Status;
    ///
    /// let all = Status::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], Status::Todo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Todo, Self::Doing, Self::Done]
    }

    /// Returns a human-readable column title.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }

    /// Returns the persisted name of the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Status;
    ///
    /// assert_eq!(Status::Todo.as_str(), "todo");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Returns the index of this status's column (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::Doing => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `Status` from its column index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Status;
    ///
    /// assert_eq!(Status::from_index(2), Some(Status::Done));
    /// assert_eq!(Status::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::Doing),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the status of the column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the status of the column to the left, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task card.
///
/// Serialized with camelCase field names so the persisted record reads
/// `{ "id", "title", "description", "status", "createdAt" }`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tack_protocol::{Card, CardId, Status};
///
/// let card = Card::new(CardId::new("card-1"), "Buy milk", "", Status::Todo, Utc::now());
/// assert_eq!(card.status, Status::Todo);
/// assert!(card.description.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier, stable for the lifetime of the card.
    pub id: CardId,
    /// Short summary. Never empty after a successful save.
    pub title: String,
    /// Optional free-form details.
    #[serde(default)]
    pub description: String,
    /// The column the card lives in.
    pub status: Status,
    /// When the card was created. Set once.
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a card from its parts.
    #[must_use]
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
            created_at,
        }
    }

    /// Returns `true` if the card has a non-empty description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_default_is_todo() {
        assert_eq!(Status::default(), Status::Todo);
    }

    #[test]
    fn status_index_roundtrip() {
        for status in Status::all() {
            assert_eq!(Status::from_index(status.index()), Some(status));
        }
    }

    #[test]
    fn status_neighbours() {
        assert_eq!(Status::Todo.previous(), None);
        assert_eq!(Status::Todo.next(), Some(Status::Doing));
        assert_eq!(Status::Doing.next(), Some(Status::Done));
        assert_eq!(Status::Done.next(), None);
        assert_eq!(Status::Done.previous(), Some(Status::Doing));
    }

    #[test]
    fn status_json_format() {
        let json = serde_json::to_string(&Status::Doing).expect("serialize");
        assert_eq!(json, r#""doing""#);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<Status, _> = serde_json::from_str(r#""blocked""#);
        assert!(result.is_err());
    }

    #[test]
    fn card_json_uses_camel_case() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let card = Card::new(CardId::new("card-1"), "Buy milk", "", Status::Todo, created_at);

        let json = serde_json::to_string(&card).expect("serialize");
        insta::assert_snapshot!(json, @r#"{"id":"card-1","title":"Buy milk","description":"","status":"todo","createdAt":"2024-01-02T03:04:05Z"}"#);
    }

    #[test]
    fn card_accepts_browser_timestamps_and_missing_description() {
        let json = r#"{"id":"card-1700000000000","title":"Write docs","status":"done","createdAt":"2024-05-06T07:08:09.123Z"}"#;
        let card: Card = serde_json::from_str(json).expect("deserialize");

        assert_eq!(card.id.as_str(), "card-1700000000000");
        assert_eq!(card.description, "");
        assert!(!card.has_description());
        assert_eq!(card.status, Status::Done);
        assert_eq!(card.created_at.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn card_id_from_millis() {
        assert_eq!(CardId::from_millis(42).to_string(), "card-42");
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    impl Arbitrary for Status {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Status::Todo), Just(Status::Doing), Just(Status::Done)].boxed()
        }
    }

    prop_compose! {
        fn arb_card()(
            millis in 0i64..4_000_000_000_000,
            title in "[a-zA-Z][a-zA-Z0-9 <>&\"']{0,40}",
            description in "[a-zA-Z0-9 .,!?\n]{0,120}",
            status in any::<Status>(),
        ) -> Card {
            let created_at = Utc.timestamp_millis_opt(millis).unwrap();
            Card::new(CardId::from_millis(millis), title, description, status, created_at)
        }
    }

    proptest! {
        /// Cards survive a JSON round trip with every field intact.
        #[test]
        fn card_roundtrip(card in arb_card()) {
            let json = serde_json::to_string(&card).expect("serialize");
            let parsed: Card = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(card, parsed);
        }

        #[test]
        fn status_name_matches_serde(status in any::<Status>()) {
            let json = serde_json::to_string(&status).expect("serialize");
            prop_assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
