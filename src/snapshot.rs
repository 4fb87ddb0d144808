//! Read-only views of a game handed to the presentation layer.

use alloc::vec::Vec;

use crate::board::{Board, Cell, GRID_SIZE};
use crate::card::{Card, CardId};
use crate::game::GameState;
use crate::result::Outcome;

/// A card as seen by a particular viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardView {
    /// Full card details.
    Visible(Card),
    /// Identity only; color and rank are withheld.
    Hidden(CardId),
}

impl CardView {
    /// Returns the card id, which every viewer may see.
    #[must_use]
    pub const fn id(&self) -> CardId {
        match self {
            Self::Visible(card) => card.id,
            Self::Hidden(id) => *id,
        }
    }
}

/// One player's hand with its access-control metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandSnapshot {
    /// The seat that may see the card details.
    pub owner: u8,
    /// Full cards; redact with [`view_for`](Self::view_for) before display.
    pub cards: Vec<Card>,
}

impl HandSnapshot {
    /// Returns the hand as `viewer` may see it.
    ///
    /// The owner sees every card; other seats see ids only. A `None` viewer
    /// is an omniscient observer (replays, tests) and sees everything.
    #[must_use]
    pub fn view_for(&self, viewer: Option<u8>) -> Vec<CardView> {
        let visible = viewer.is_none_or(|seat| seat == self.owner);
        self.cards
            .iter()
            .map(|card| {
                if visible {
                    CardView::Visible(*card)
                } else {
                    CardView::Hidden(card.id)
                }
            })
            .collect()
    }
}

/// Turn information in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSnapshot {
    /// Seat of the player to move.
    pub current_player: u8,
    /// Budget used so far this turn.
    pub moves_taken: u8,
    /// Zero-based turn counter.
    pub number: u32,
}

/// Terminal information in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terminal {
    /// Whether the game has ended.
    pub is_over: bool,
    /// The winner or draw, once over.
    pub outcome: Option<Outcome>,
}

/// An immutable copy of everything a presentation layer may render.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Board cells in row-major order.
    pub cells: [Cell; GRID_SIZE],
    /// Cards left in the deck.
    pub deck_size: usize,
    /// Hands indexed by seat.
    pub hands: Vec<HandSnapshot>,
    /// Turn information.
    pub turn: TurnSnapshot,
    /// Terminal information.
    pub terminal: Terminal,
}

impl Snapshot {
    /// Captures the current state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let turn = state.turn();
        Self {
            cells: *state.board().cells(),
            deck_size: state.deck().len(),
            hands: state
                .hands()
                .iter()
                .map(|hand| HandSnapshot {
                    owner: hand.owner(),
                    cards: hand.cards().to_vec(),
                })
                .collect(),
            turn: TurnSnapshot {
                current_player: turn.current_player,
                moves_taken: turn.moves_taken,
                number: turn.number,
            },
            terminal: Terminal {
                is_over: state.is_over(),
                outcome: state.outcome(),
            },
        }
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> Board {
        Board::from_cells(self.cells)
    }

    /// Returns the hand of `owner` as `viewer` may see it.
    #[must_use]
    pub fn hand_view(&self, viewer: Option<u8>, owner: u8) -> Option<Vec<CardView>> {
        self.hands
            .get(usize::from(owner))
            .map(|hand| hand.view_for(viewer))
    }
}
