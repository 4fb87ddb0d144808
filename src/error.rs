//! Error types for game setup and move handling.

use thiserror::Error;

/// Reasons a move is rejected.
///
/// A rejected move never mutates the game. The session reports it through
/// [`MoveOutcome::Rejected`](crate::MoveOutcome::Rejected) rather than as a
/// fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidMoveError {
    /// Cell index is outside the grid.
    #[error("cell index is outside the grid")]
    CellOutOfBounds,
    /// Target cell is already occupied.
    #[error("cell is already occupied")]
    CellOccupied,
    /// The acting player is not authorized to move right now.
    #[error("player is not the active player")]
    NotActivePlayer,
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// The acting player is not seated in this game.
    #[error("player not found")]
    UnknownPlayer,
    /// The move kind is not recognized.
    #[error("unknown move kind")]
    UnknownKind,
    /// The move arguments do not match the move kind.
    #[error("bad move arguments")]
    BadArguments,
    /// The move kind is disabled by the game options.
    #[error("move is not allowed by the game options")]
    MoveNotAllowed,
    /// The move would exceed the per-turn move budget.
    #[error("move exceeds the maximum moves for this turn")]
    TurnBudgetExceeded,
}

/// A draw or deal asked for more cards than the deck holds.
///
/// This is fatal for the session: the configured rules cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("requested {requested} cards but only {available} remain in the deck")]
pub struct DeckUnderflowError {
    /// Number of cards requested.
    pub requested: usize,
    /// Number of cards left in the deck.
    pub available: usize,
}

/// Errors in the game configuration, detected before any move is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Minimum moves per turn is greater than the maximum.
    #[error("minimum moves per turn ({min}) exceeds maximum ({max})")]
    InvalidTurnBounds {
        /// Configured minimum.
        min: u8,
        /// Configured maximum.
        max: u8,
    },
    /// Maximum moves per turn is zero.
    #[error("maximum moves per turn is zero")]
    ZeroMaxMoves,
    /// A move kind costs more than a whole turn allows.
    #[error("a move cost exceeds the maximum moves per turn")]
    MoveCostExceedsMax,
    /// An enabled move kind costs nothing, so it never advances the turn.
    #[error("an enabled move kind has zero cost")]
    ZeroMoveCost,
    /// Some sequence of moves reaches a point below the turn minimum where
    /// no further move fits under the maximum.
    #[error("move costs can leave a turn unable to reach its minimum")]
    UnfinishableTurn,
    /// Fewer than two players are configured.
    #[error("at least two players are required")]
    TooFewPlayers,
    /// More players than seat ids can address.
    #[error("too many players")]
    TooManyPlayers,
    /// Two players share the same symbol.
    #[error("player symbols must be unique")]
    DuplicateSymbol,
    /// The deck composition names no colors.
    #[error("deck composition has no colors")]
    EmptyPalette,
    /// A color appears twice in the deck composition.
    #[error("deck composition repeats a color")]
    DuplicateColor,
    /// The deck composition names no ranks.
    #[error("deck composition has no ranks")]
    EmptyRankTable,
    /// A rank is zero.
    #[error("card ranks must be positive")]
    InvalidRank,
    /// A rank appears twice in the deck composition.
    #[error("deck composition repeats a rank")]
    DuplicateRank,
    /// A rank has a copy count of zero.
    #[error("card copy counts must be positive")]
    ZeroCount,
    /// The composition produces more cards than card ids can address.
    #[error("deck composition produces too many cards")]
    TooManyCards,
    /// The deck holds no cards.
    #[error("deck is empty")]
    EmptyDeck,
    /// Two cards share the same instance id.
    #[error("duplicate card id in deck")]
    DuplicateCardId,
}

/// Errors that prevent a session from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The options are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The deck cannot cover the initial deal.
    #[error("initial deal failed: {0}")]
    Deal(#[from] DeckUnderflowError),
}

/// Fatal errors that end a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A draw exceeded the remaining deck.
    #[error(transparent)]
    DeckUnderflow(#[from] DeckUnderflowError),
    /// The session was halted by an earlier fatal error.
    #[error("session halted by an earlier fatal error")]
    Halted,
}
