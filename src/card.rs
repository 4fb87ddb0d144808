//! Card types.

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// White.
    White,
}

impl Color {
    /// Every color in the palette, in deck generation order.
    pub const ALL: [Self; 5] = [Self::Yellow, Self::Blue, Self::Red, Self::Green, Self::White];
}

/// Unique instance id of a card within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub u16);

/// A card instance.
///
/// Two cards may share color and rank; the [`CardId`] tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Instance id, unique across the game.
    pub id: CardId,
    /// The color of the card.
    pub color: Color,
    /// The rank of the card (1 and up).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank or the id. Decks built
    /// through [`Deck::from_cards`](crate::Deck::from_cards) reject duplicate
    /// ids.
    #[must_use]
    pub const fn new(id: CardId, color: Color, rank: u8) -> Self {
        Self { id, color, rank }
    }
}

/// Number of cards in the default deck composition.
pub const DEFAULT_DECK_SIZE: usize = 50;
