//! Player hands.

use alloc::vec::Vec;

use crate::card::{Card, CardId};

/// The cards held by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Seat of the owning player.
    owner: u8,
    /// Cards in the hand, in the order received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand for `owner`.
    #[must_use]
    pub const fn new(owner: u8) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn with_cards(owner: u8, cards: Vec<Card>) -> Self {
        Self { owner, cards }
    }

    /// Returns a copy of the hand with `cards` appended.
    #[must_use]
    pub fn receiving(&self, cards: &[Card]) -> Self {
        let mut next = self.clone();
        next.cards.extend_from_slice(cards);
        next
    }

    /// Returns the owning player.
    #[must_use]
    pub const fn owner(&self) -> u8 {
        self.owner
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card with `id`.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id == id)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
