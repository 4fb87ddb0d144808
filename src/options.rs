//! Game configuration options.

use alloc::vec::Vec;

use crate::board::Symbol;
use crate::deck::DeckComposition;
use crate::error::ConfigError;
use crate::moves::MoveKind;

/// When a game without a winner ends in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DrawCondition {
    /// Every cell is occupied.
    #[default]
    BoardFull,
    /// Every cell is occupied, or the deck has run out.
    BoardFullOrDeckEmpty,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardtac::GameOptions;
///
/// let options = GameOptions::default()
///     .with_turn_bounds(1, 2)
///     .with_hand_size(3)
///     .with_allow_draw(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// One symbol per seat; seat `i` plays `symbols[i]`.
    pub symbols: Vec<Symbol>,
    /// Moves a player must make before the turn passes.
    pub min_moves_per_turn: u8,
    /// Moves a player may make in a single turn.
    pub max_moves_per_turn: u8,
    /// Turn budget consumed by a `clickCell` move.
    pub click_cost: u8,
    /// Turn budget consumed by a `draw` move.
    pub draw_cost: u8,
    /// Cards dealt to each player at setup.
    pub hand_size: usize,
    /// Cards taken by one `draw` move.
    pub draw_size: usize,
    /// Whether `draw` is available as a move.
    pub allow_draw: bool,
    /// Deck contents.
    pub composition: DeckComposition,
    /// When the game ends without a winner.
    pub draw_condition: DrawCondition,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            symbols: alloc::vec![Symbol('X'), Symbol('O')],
            min_moves_per_turn: 1,
            max_moves_per_turn: 1,
            click_cost: 1,
            draw_cost: 1,
            hand_size: 5,
            draw_size: 1,
            allow_draw: true,
            composition: DeckComposition::default(),
            draw_condition: DrawCondition::BoardFull,
        }
    }
}

impl GameOptions {
    /// Sets the player symbols, one per seat.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::{GameOptions, Symbol};
    ///
    /// let options = GameOptions::default().with_symbols(['A', 'B', 'C']);
    /// assert_eq!(options.player_count(), 3);
    /// assert_eq!(options.symbol(2), Some(Symbol('C')));
    /// ```
    #[must_use]
    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.symbols = symbols.into_iter().map(Symbol).collect();
        self
    }

    /// Sets the minimum and maximum moves per turn.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_bounds(2, 3);
    /// assert_eq!(options.min_moves_per_turn, 2);
    /// assert_eq!(options.max_moves_per_turn, 3);
    /// ```
    #[must_use]
    pub const fn with_turn_bounds(mut self, min: u8, max: u8) -> Self {
        self.min_moves_per_turn = min;
        self.max_moves_per_turn = max;
        self
    }

    /// Sets the turn budget consumed by a `clickCell` move.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::GameOptions;
    ///
    /// let options = GameOptions::default().with_click_cost(2);
    /// assert_eq!(options.click_cost, 2);
    /// ```
    #[must_use]
    pub const fn with_click_cost(mut self, cost: u8) -> Self {
        self.click_cost = cost;
        self
    }

    /// Sets the turn budget consumed by a `draw` move.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_cost(0);
    /// assert_eq!(options.draw_cost, 0);
    /// ```
    #[must_use]
    pub const fn with_draw_cost(mut self, cost: u8) -> Self {
        self.draw_cost = cost;
        self
    }

    /// Sets the number of cards dealt to each player at setup.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(0);
    /// assert_eq!(options.hand_size, 0);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Sets the number of cards taken by one `draw` move.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_size(2);
    /// assert_eq!(options.draw_size, 2);
    /// ```
    #[must_use]
    pub const fn with_draw_size(mut self, size: usize) -> Self {
        self.draw_size = size;
        self
    }

    /// Sets whether `draw` is available as a move.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::GameOptions;
    ///
    /// let options = GameOptions::default().with_allow_draw(false);
    /// assert!(!options.allow_draw);
    /// ```
    #[must_use]
    pub const fn with_allow_draw(mut self, allowed: bool) -> Self {
        self.allow_draw = allowed;
        self
    }

    /// Sets the deck composition.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::{Color, DeckComposition, GameOptions, RankCount};
    ///
    /// let composition = DeckComposition::new(vec![Color::Red], vec![RankCount::new(1, 20)]);
    /// let options = GameOptions::default().with_composition(composition.clone());
    /// assert_eq!(options.composition, composition);
    /// ```
    #[must_use]
    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Sets when a game without a winner ends in a draw.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::{DrawCondition, GameOptions};
    ///
    /// let options = GameOptions::default().with_draw_condition(DrawCondition::BoardFullOrDeckEmpty);
    /// assert_eq!(options.draw_condition, DrawCondition::BoardFullOrDeckEmpty);
    /// ```
    #[must_use]
    pub const fn with_draw_condition(mut self, condition: DrawCondition) -> Self {
        self.draw_condition = condition;
        self
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol of `player`, or `None` if no such seat exists.
    #[must_use]
    pub fn symbol(&self, player: u8) -> Option<Symbol> {
        self.symbols.get(usize::from(player)).copied()
    }

    /// Returns the turn budget consumed by a move kind.
    #[must_use]
    pub const fn cost(&self, kind: MoveKind) -> u8 {
        match kind {
            MoveKind::ClickCell => self.click_cost,
            MoveKind::Draw => self.draw_cost,
        }
    }

    /// Checks the options before a game starts.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two or more than 256 players,
    /// symbols repeat, the turn bounds are inconsistent, a move cost is zero
    /// or exceeds the per-turn maximum, the move costs can strand a turn
    /// below its minimum, or the deck composition is malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.len() < 2 {
            return Err(ConfigError::TooFewPlayers);
        }
        if self.symbols.len() > usize::from(u8::MAX) + 1 {
            return Err(ConfigError::TooManyPlayers);
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..i].contains(symbol) {
                return Err(ConfigError::DuplicateSymbol);
            }
        }

        if self.max_moves_per_turn == 0 {
            return Err(ConfigError::ZeroMaxMoves);
        }
        if self.min_moves_per_turn > self.max_moves_per_turn {
            return Err(ConfigError::InvalidTurnBounds {
                min: self.min_moves_per_turn,
                max: self.max_moves_per_turn,
            });
        }
        if self.click_cost > self.max_moves_per_turn
            || (self.allow_draw && self.draw_cost > self.max_moves_per_turn)
        {
            return Err(ConfigError::MoveCostExceedsMax);
        }
        if self.click_cost == 0 || (self.allow_draw && self.draw_cost == 0) {
            return Err(ConfigError::ZeroMoveCost);
        }
        self.check_turn_completes()?;

        self.composition.validate()
    }

    /// Checks that every partial turn below the minimum can still take its
    /// cheapest move without passing the maximum.
    ///
    /// Costs are positive, so each accepted move moves the turn strictly
    /// closer to its minimum and every turn ends.
    fn check_turn_completes(&self) -> Result<(), ConfigError> {
        let min = usize::from(self.min_moves_per_turn);
        let max = usize::from(self.max_moves_per_turn);

        let mut costs = [Some(self.click_cost), None];
        if self.allow_draw {
            costs[1] = Some(self.draw_cost);
        }
        let costs = costs.into_iter().flatten().map(usize::from);
        let cheapest = costs.clone().min().unwrap_or(0);

        let mut reachable = [false; 256];
        reachable[0] = true;
        for taken in 0..min {
            if !reachable[taken] {
                continue;
            }
            if taken + cheapest > max {
                return Err(ConfigError::UnfinishableTurn);
            }
            for cost in costs.clone() {
                if let Some(slot) = reachable.get_mut(taken + cost) {
                    *slot = true;
                }
            }
        }

        Ok(())
    }
}
