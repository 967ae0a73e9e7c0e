//! The ordered card collection.
//!
//! [`Board`] is the single piece of state the application owns. It keeps
//! cards in insertion order across all columns; a column is simply the
//! subsequence of cards sharing a [`Status`]. Every operation here is pure
//! and reports whether the collection changed, so callers can decide when to
//! persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, Status};
use crate::error::{ProtocolError, Result};

/// The ordered collection of cards.
///
/// Serializes as a plain JSON array of [`Card`] records.
///
/// # Examples
///
/// ```
/// use tack_protocol::{Board, Status};
///
/// let mut board = Board::new();
/// let id = board.create_card("Buy milk", "", Status::Todo).expect("valid title");
///
/// assert!(board.move_card(&id, Status::Doing));
/// assert_eq!(board.get(&id).unwrap().status, Status::Doing);
///
/// assert!(board.delete_card(&id));
/// assert!(board.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from cards in their existing order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parses a persisted board.
    ///
    /// A JSON `null` yields `Ok(None)`; an array yields the board as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DeserializationFailed`] if the text is not a
    /// JSON array of cards (or `null`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Board;
    ///
    /// assert_eq!(Board::from_json("null").unwrap(), None);
    /// assert!(Board::from_json("[]").unwrap().unwrap().is_empty());
    /// assert!(Board::from_json("{oops").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
    }

    /// Serializes the whole board as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Returns all cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Finds a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Returns `true` if a card with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over the cards of one column, in insertion order.
    pub fn cards_with_status(&self, status: Status) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |card| card.status == status)
    }

    /// Returns the number of cards in one column.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.cards_with_status(status).count()
    }

    /// Appends a new card stamped with the current time.
    ///
    /// Title and description are trimmed. Returns `None` (and leaves the board
    /// untouched) when the trimmed title is empty.
    pub fn create_card(&mut self, title: &str, description: &str, status: Status) -> Option<CardId> {
        self.create_card_at(title, description, status, Utc::now())
    }

    /// Appends a new card created at `now`.
    ///
    /// The id is derived from `now` in milliseconds and bumped until it is
    /// unique within the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tack_protocol::{Board, Status};
    ///
    /// let now = Utc.timestamp_millis_opt(1_000).unwrap();
    /// let mut board = Board::new();
    ///
    /// let first = board.create_card_at("One", "", Status::Todo, now).unwrap();
    /// let second = board.create_card_at("Two", "", Status::Todo, now).unwrap();
    /// assert_eq!(first.as_str(), "card-1000");
    /// assert_eq!(second.as_str(), "card-1001");
    ///
    /// assert!(board.create_card_at("   ", "", Status::Todo, now).is_none());
    /// assert_eq!(board.len(), 2);
    /// ```
    pub fn create_card_at(
        &mut self,
        title: &str,
        description: &str,
        status: Status,
        now: DateTime<Utc>,
    ) -> Option<CardId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = self.next_id(now);
        self.cards.push(Card::new(
            id.clone(),
            title,
            description.trim(),
            status,
            now,
        ));
        Some(id)
    }

    /// Replaces the title and description of an existing card.
    ///
    /// Returns `false` without changes when the trimmed title is empty or the
    /// card does not exist.
    pub fn edit_card(&mut self, id: &CardId, title: &str, description: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        let Some(card) = self.get_mut(id) else {
            return false;
        };
        card.title = title.to_string();
        card.description = description.trim().to_string();
        true
    }

    /// Moves a card to another column, keeping its position in the collection.
    ///
    /// Returns `false` when the card does not exist or already has `status`.
    pub fn move_card(&mut self, id: &CardId, status: Status) -> bool {
        match self.get_mut(id) {
            Some(card) if card.status != status => {
                card.status = status;
                true
            }
            _ => false,
        }
    }

    /// Removes every card with the given id.
    ///
    /// Returns `false` when no card matched.
    pub fn delete_card(&mut self, id: &CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| &card.id != id);
        self.cards.len() < before
    }

    /// Removes all cards.
    ///
    /// Returns `false` if the board was already empty.
    pub fn clear(&mut self) -> bool {
        if self.cards.is_empty() {
            return false;
        }
        self.cards.clear();
        true
    }

    fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == id)
    }

    fn next_id(&self, now: DateTime<Utc>) -> CardId {
        let mut millis = now.timestamp_millis();
        loop {
            let id = CardId::from_millis(millis);
            if !self.contains(&id) {
                return id;
            }
            millis += 1;
        }
    }
}
