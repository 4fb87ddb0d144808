//! Move-count bookkeeping for a turn.

use super::state::Turn;

impl Turn {
    /// Creates the first turn of a game.
    #[must_use]
    pub const fn first(min_moves: u8, max_moves: u8) -> Self {
        Self {
            current_player: 0,
            moves_taken: 0,
            min_moves,
            max_moves,
            number: 0,
        }
    }

    /// Returns whether a move of `cost` still fits in this turn.
    #[must_use]
    pub const fn fits(&self, cost: u8) -> bool {
        match self.moves_taken.checked_add(cost) {
            Some(total) => total <= self.max_moves,
            None => false,
        }
    }

    /// Returns whether the turn has met its move quota.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.moves_taken >= self.min_moves
    }

    /// Returns the budget left before the turn maximum.
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        self.max_moves.saturating_sub(self.moves_taken)
    }

    /// Charges an accepted move of `cost`. Callers check [`fits`](Self::fits)
    /// first.
    pub(super) const fn record(&mut self, cost: u8) {
        self.moves_taken = self.moves_taken.saturating_add(cost);
    }

    /// Hands the turn to the next seat, round-robin.
    pub(super) fn rotate(&mut self, player_count: usize) {
        let next = (usize::from(self.current_player) + 1) % player_count;
        self.current_player = next as u8;
        self.moves_taken = 0;
        self.number += 1;
    }
}
