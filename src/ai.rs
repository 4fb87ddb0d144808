//! Candidate move enumeration for search-based agents.
//!
//! Enumeration is read-only and deterministic. It does not check turn
//! ownership or whether the game is over; searchers filter with
//! [`Game::submit`](crate::Game::submit) on a cloned session as needed.

use alloc::vec::Vec;

use crate::moves::Move;
use crate::snapshot::Snapshot;

/// Lists a `clickCell` move for every empty cell, in ascending index order.
///
/// Moves are attributed to the snapshot's current player.
///
/// ```
/// use cardtac::{Game, GameOptions, ai};
///
/// let game = Game::new(GameOptions::default(), 1).unwrap();
/// let moves = ai::enumerate(&game.snapshot());
/// assert_eq!(moves.len(), 9);
/// assert_eq!(moves[0].args, vec![0]);
/// ```
#[must_use]
pub fn enumerate(snapshot: &Snapshot) -> Vec<Move> {
    let player = snapshot.turn.current_player;
    snapshot
        .board()
        .empty_indices()
        .map(|index| Move::click_cell(player, index))
        .collect()
}
