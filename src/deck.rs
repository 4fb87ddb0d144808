//! Deck composition and deck primitives.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, CardId, Color};
use crate::error::{ConfigError, DeckUnderflowError};

/// Number of copies of one rank in every color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankCount {
    /// The rank.
    pub rank: u8,
    /// Copies of this rank per color.
    pub count: u8,
}

impl RankCount {
    /// Creates a new rank count.
    #[must_use]
    pub const fn new(rank: u8, count: u8) -> Self {
        Self { rank, count }
    }
}

/// Data-driven deck definition: every color gets the same rank table.
///
/// The default composition has five colors with ranks
/// `1×3, 2×2, 3×2, 4×2, 5×1`, fifty cards in total.
///
/// ```
/// use cardtac::{Color, DeckComposition, RankCount};
///
/// let composition = DeckComposition::new(
///     vec![Color::Red, Color::Blue],
///     vec![RankCount::new(1, 2), RankCount::new(2, 1)],
/// );
/// assert_eq!(composition.card_count(), 6);
/// assert!(composition.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckComposition {
    /// Colors in generation order.
    pub colors: Vec<Color>,
    /// Rank table applied to each color.
    pub ranks: Vec<RankCount>,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
            ranks: alloc::vec![
                RankCount::new(1, 3),
                RankCount::new(2, 2),
                RankCount::new(3, 2),
                RankCount::new(4, 2),
                RankCount::new(5, 1),
            ],
        }
    }
}

impl DeckComposition {
    /// Creates a composition from a palette and a rank table.
    #[must_use]
    pub const fn new(colors: Vec<Color>, ranks: Vec<RankCount>) -> Self {
        Self { colors, ranks }
    }

    /// Returns the number of cards this composition produces.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let per_color: usize = self.ranks.iter().map(|r| usize::from(r.count)).sum();
        per_color * self.colors.len()
    }

    /// Checks the composition for empty or repeated entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette or rank table is empty, a color or
    /// rank repeats, a rank is zero, a count is zero, or the card total does
    /// not fit in a [`CardId`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.ranks.is_empty() {
            return Err(ConfigError::EmptyRankTable);
        }

        let mut colors = HashSet::new();
        if !self.colors.iter().all(|color| colors.insert(*color)) {
            return Err(ConfigError::DuplicateColor);
        }

        let mut ranks = HashSet::new();
        for entry in &self.ranks {
            if entry.rank == 0 {
                return Err(ConfigError::InvalidRank);
            }
            if entry.count == 0 {
                return Err(ConfigError::ZeroCount);
            }
            if !ranks.insert(entry.rank) {
                return Err(ConfigError::DuplicateRank);
            }
        }

        if self.card_count() > usize::from(u16::MAX) + 1 {
            return Err(ConfigError::TooManyCards);
        }

        Ok(())
    }

    /// Generates the full card set in color, rank, copy order.
    ///
    /// Ids are assigned sequentially from zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the composition fails [`validate`](Self::validate).
    pub fn cards(&self) -> Result<Vec<Card>, ConfigError> {
        self.validate()?;

        let mut cards = Vec::with_capacity(self.card_count());
        let mut next_id: u16 = 0;

        for &color in &self.colors {
            for entry in &self.ranks {
                for _ in 0..entry.count {
                    cards.push(Card::new(CardId(next_id), color, entry.rank));
                    next_id = next_id.wrapping_add(1);
                }
            }
        }

        Ok(cards)
    }
}

/// An ordered pile of undealt cards. The top of the deck is the front.
///
/// Deck operations take `&self` and return new values, so the owner decides
/// when to replace its deck.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck from cards, top card first.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no cards or two cards share an id.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, ConfigError> {
        if cards.is_empty() {
            return Err(ConfigError::EmptyDeck);
        }

        let mut seen = HashSet::with_capacity(cards.len());
        if !cards.iter().all(|card| seen.insert(card.id)) {
            return Err(ConfigError::DuplicateCardId);
        }

        Ok(Self { cards })
    }

    /// Generates a deck from a composition, in generation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the composition is invalid.
    pub fn from_composition(composition: &DeckComposition) -> Result<Self, ConfigError> {
        Self::from_cards(composition.cards()?)
    }

    /// Returns the cards, top card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a uniformly random permutation of this deck.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Takes the top `n` cards.
    ///
    /// Returns the drawn cards in deck order together with the remaining
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` exceeds the number of cards left.
    pub fn draw_top(&self, n: usize) -> Result<(Vec<Card>, Self), DeckUnderflowError> {
        if n > self.cards.len() {
            return Err(DeckUnderflowError {
                requested: n,
                available: self.cards.len(),
            });
        }

        let (drawn, rest) = self.cards.split_at(n);
        Ok((drawn.to_vec(), Self { cards: rest.to_vec() }))
    }

    /// Deals an initial hand of `n` cards. Same contract as
    /// [`draw_top`](Self::draw_top).
    ///
    /// # Errors
    ///
    /// Returns an error if `n` exceeds the number of cards left.
    pub fn deal(&self, n: usize) -> Result<(Vec<Card>, Self), DeckUnderflowError> {
        self.draw_top(n)
    }
}
