//! Game state types.

use alloc::vec::Vec;

use crate::board::Board;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::moves::Move;
use crate::result::Outcome;

/// Turn controller phase.
///
/// Completing a turn is not a resting phase: it is reported through
/// [`Transition::TurnComplete`](crate::Transition::TurnComplete) and the
/// stored phase is already `AwaitingMove` for the next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// Waiting for the current player to move.
    AwaitingMove,
    /// The game has ended; every move is rejected.
    GameOver,
}

/// Whose turn it is and how much of it has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// Seat of the player to move.
    pub current_player: u8,
    /// Budget used so far this turn.
    pub moves_taken: u8,
    /// Budget that completes the turn.
    pub min_moves: u8,
    /// Budget a turn may never exceed.
    pub max_moves: u8,
    /// Zero-based turn counter.
    pub number: u32,
}

/// Authoritative state of one game.
///
/// Only the session mutates it; readers get `&GameState` or a
/// [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) deck: Deck,
    pub(super) hands: Vec<Hand>,
    pub(super) turn: Turn,
    pub(super) history: Vec<Move>,
    pub(super) outcome: Option<Outcome>,
}

impl GameState {
    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the undealt deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns every hand, indexed by seat.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand of `player`.
    #[must_use]
    pub fn hand(&self, player: u8) -> Option<&Hand> {
        self.hands.get(usize::from(player))
    }

    /// Returns the turn.
    #[must_use]
    pub const fn turn(&self) -> &Turn {
        &self.turn
    }

    /// Returns every accepted move in order.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the final outcome once the game is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        if self.is_over() {
            TurnPhase::GameOver
        } else {
            TurnPhase::AwaitingMove
        }
    }

    /// Returns the number of cards in the deck and all hands together.
    ///
    /// This never changes after setup.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hands.iter().map(Hand::len).sum::<usize>()
    }
}
