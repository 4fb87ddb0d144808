//! Move and game result types.

use crate::error::InvalidMoveError;

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The player completed a winning triple.
    Winner(u8),
    /// The game ended without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<u8> {
        match self {
            Self::Winner(player) => Some(player),
            Self::Draw => None,
        }
    }

    /// Returns whether `player` won.
    #[must_use]
    pub const fn is_winner(self, player: u8) -> bool {
        matches!(self, Self::Winner(p) if p == player)
    }
}

/// What an accepted move did to the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// The same player keeps moving.
    Continue,
    /// The turn ended and passed to `next_player`.
    TurnComplete {
        /// The player now to move.
        next_player: u8,
    },
    /// The game ended.
    GameOver(Outcome),
}

/// Result of submitting a move that did not hit a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum MoveOutcome {
    /// The move was applied.
    Accepted(Transition),
    /// The move was refused and nothing changed.
    Rejected(InvalidMoveError),
}

impl MoveOutcome {
    /// Returns whether the move was applied.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<InvalidMoveError> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(err) => Some(*err),
        }
    }

    /// Returns the turn transition of an accepted move.
    #[must_use]
    pub const fn transition(&self) -> Option<Transition> {
        match self {
            Self::Accepted(transition) => Some(*transition),
            Self::Rejected(_) => None,
        }
    }
}
