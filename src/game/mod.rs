//! Game session and turn control.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai;
use crate::board::Board;
use crate::deck::Deck;
use crate::dispatch;
use crate::error::{DeckUnderflowError, InvalidMoveError, SessionError, SetupError};
use crate::hand::Hand;
use crate::moves::{Move, MoveKind};
use crate::options::{DrawCondition, GameOptions};
use crate::result::{MoveOutcome, Outcome, Transition};
use crate::snapshot::Snapshot;
use crate::victory;

pub mod state;
mod turn;

pub use state::{GameState, Turn, TurnPhase};

/// Why a planned move cannot be applied.
enum Refusal {
    Invalid(InvalidMoveError),
    Fatal(DeckUnderflowError),
}

impl From<InvalidMoveError> for Refusal {
    fn from(err: InvalidMoveError) -> Self {
        Self::Invalid(err)
    }
}

impl From<DeckUnderflowError> for Refusal {
    fn from(err: DeckUnderflowError) -> Self {
        Self::Fatal(err)
    }
}

/// A validated change waiting to be written.
enum Change {
    Mark(Board),
    Draw { deck: Deck, hand: Hand },
}

/// A tic-tac-toe session with a shared card deck.
///
/// The session owns the [`GameState`] and applies moves one at a time through
/// [`submit`](Self::submit). Every check runs before any write, so a rejected
/// move leaves no trace. Sessions share nothing and can be cloned freely,
/// e.g. to explore moves during a search.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Authoritative state.
    state: GameState,
    /// Connection flags reported by the host, indexed by seat.
    connected: Vec<bool>,
    /// The fatal error that stopped the session, if any.
    halted: Option<DeckUnderflowError>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is generated from the options, shuffled with the seed and
    /// dealt to every seat in order.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state().deck().len(), 40);
    /// assert_eq!(game.state().hand(1).unwrap().len(), 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the deck cannot cover
    /// the initial deal.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::from_composition(&options.composition)?.shuffled(&mut rng);

        Self::with_deck(options, deck)
    }

    /// Creates a new game with a prepared deck, top card first.
    ///
    /// The deck is dealt as given, without shuffling. If the draw condition
    /// already holds after the deal, the game starts over as a draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the deck cannot cover
    /// the initial deal.
    pub fn with_deck(options: GameOptions, deck: Deck) -> Result<Self, SetupError> {
        options.validate()?;

        let player_count = options.player_count();
        let mut deck = deck;
        let mut hands = Vec::with_capacity(player_count);

        for seat in 0..player_count {
            let (cards, rest) = deck.deal(options.hand_size)?;
            hands.push(Hand::with_cards(seat as u8, cards));
            deck = rest;
        }

        log::info!(
            "game set up: {player_count} players, {} cards in deck, {} per hand",
            deck.len(),
            options.hand_size
        );

        let state = GameState {
            board: Board::new(),
            deck,
            hands,
            turn: Turn::first(options.min_moves_per_turn, options.max_moves_per_turn),
            history: Vec::new(),
            outcome: None,
        };

        let mut game = Self {
            options,
            state,
            connected: alloc::vec![true; player_count],
            halted: None,
        };

        // The deal alone can exhaust the deck.
        if game.draw_condition_holds() {
            log::info!("game over at setup: draw condition already holds");
            game.state.outcome = Some(Outcome::Draw);
        }

        Ok(game)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an immutable copy of the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Lists candidate moves for the current state.
    #[must_use]
    pub fn enumerate(&self) -> Vec<Move> {
        ai::enumerate(&self.snapshot())
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> u8 {
        self.state.turn.current_player
    }

    /// Returns the fatal error that halted the session, if any.
    #[must_use]
    pub const fn halted(&self) -> Option<DeckUnderflowError> {
        self.halted
    }

    /// Records whether `player` is connected.
    ///
    /// Returns `false` if there is no such seat.
    pub fn set_connected(&mut self, player: u8, connected: bool) -> bool {
        match self.connected.get_mut(usize::from(player)) {
            Some(flag) => {
                *flag = connected;
                true
            }
            None => false,
        }
    }

    /// Returns whether `player` is connected.
    #[must_use]
    pub fn is_connected(&self, player: u8) -> bool {
        self.connected
            .get(usize::from(player))
            .copied()
            .unwrap_or(false)
    }

    /// Returns whether `player` may move right now: it is their turn and
    /// they are connected.
    #[must_use]
    pub fn is_active(&self, player: u8) -> bool {
        player == self.state.turn.current_player && self.is_connected(player)
    }

    /// Submits a move.
    ///
    /// Returns [`MoveOutcome::Accepted`] with the resulting turn transition,
    /// or [`MoveOutcome::Rejected`] with nothing changed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtac::{Game, GameOptions, Move, MoveOutcome, Transition};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// let outcome = game.submit(&Move::click_cell(0, 4)).unwrap();
    /// assert_eq!(
    ///     outcome,
    ///     MoveOutcome::Accepted(Transition::TurnComplete { next_player: 1 })
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DeckUnderflow`] if a draw exceeds the deck.
    /// The session is then halted and every later call returns
    /// [`SessionError::Halted`].
    pub fn submit(&mut self, mv: &Move) -> Result<MoveOutcome, SessionError> {
        if self.halted.is_some() {
            return Err(SessionError::Halted);
        }

        match self.plan(mv) {
            Ok(change) => {
                let transition = self.commit(mv, change);
                log::debug!("accepted {mv}: {transition:?}");
                Ok(MoveOutcome::Accepted(transition))
            }
            Err(Refusal::Invalid(err)) => {
                log::debug!("rejected {mv}: {err}");
                Ok(MoveOutcome::Rejected(err))
            }
            Err(Refusal::Fatal(err)) => {
                log::error!("halting session after {mv}: {err}");
                self.halted = Some(err);
                Err(SessionError::DeckUnderflow(err))
            }
        }
    }

    /// Submits a move given as a wire kind name and raw arguments.
    ///
    /// An unknown kind is rejected like any other invalid move.
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Self::submit).
    pub fn submit_parts(
        &mut self,
        kind: &str,
        args: Vec<i64>,
        player: u8,
    ) -> Result<MoveOutcome, SessionError> {
        if self.halted.is_some() {
            return Err(SessionError::Halted);
        }

        match Move::parse(kind, args, player) {
            Ok(mv) => self.submit(&mv),
            Err(err) => {
                log::debug!("rejected unparsable move from player {player}: {err}");
                Ok(MoveOutcome::Rejected(err))
            }
        }
    }

    /// Validates `mv` against the current state without writing anything.
    fn plan(&self, mv: &Move) -> Result<Change, Refusal> {
        if self.state.is_over() {
            return Err(InvalidMoveError::GameOver.into());
        }

        let symbol = self
            .options
            .symbol(mv.player)
            .ok_or(InvalidMoveError::UnknownPlayer)?;
        let is_active = self.is_active(mv.player);
        let cost = self.options.cost(mv.kind);

        match mv.kind {
            MoveKind::ClickCell => {
                let index = mv.cell_index()?;
                let board = dispatch::click_cell(&self.state.board, index, symbol, is_active)?;
                self.check_budget(cost)?;
                Ok(Change::Mark(board))
            }
            MoveKind::Draw => {
                mv.expect_no_args()?;
                if !self.options.allow_draw {
                    return Err(InvalidMoveError::MoveNotAllowed.into());
                }
                if !is_active {
                    return Err(InvalidMoveError::NotActivePlayer.into());
                }
                self.check_budget(cost)?;

                let hand = self
                    .state
                    .hand(mv.player)
                    .ok_or(InvalidMoveError::UnknownPlayer)?;
                let (deck, hand) =
                    dispatch::draw_cards(&self.state.deck, hand, self.options.draw_size)?;
                Ok(Change::Draw { deck, hand })
            }
        }
    }

    fn check_budget(&self, cost: u8) -> Result<(), InvalidMoveError> {
        if self.state.turn.fits(cost) {
            Ok(())
        } else {
            Err(InvalidMoveError::TurnBudgetExceeded)
        }
    }

    /// Writes a planned change and advances the turn.
    fn commit(&mut self, mv: &Move, change: Change) -> Transition {
        match change {
            Change::Mark(board) => self.state.board = board,
            Change::Draw { deck, hand } => {
                self.state.deck = deck;
                if let Some(slot) = self.state.hands.get_mut(usize::from(hand.owner())) {
                    *slot = hand;
                }
            }
        }

        self.state.history.push(mv.clone());
        self.state.turn.record(self.options.cost(mv.kind));

        if let Some(outcome) = self.terminal_outcome(mv.player) {
            log::info!("game over after {} moves: {outcome:?}", self.state.history.len());
            self.state.outcome = Some(outcome);
            return Transition::GameOver(outcome);
        }

        if self.state.turn.is_complete() {
            self.state.turn.rotate(self.options.player_count());
            return Transition::TurnComplete {
                next_player: self.state.turn.current_player,
            };
        }

        Transition::Continue
    }

    /// Re-evaluates the whole board after a move by `actor`.
    fn terminal_outcome(&self, actor: u8) -> Option<Outcome> {
        let cells = self.state.board.cells();

        if victory::is_victory(cells) {
            return Some(Outcome::Winner(actor));
        }

        self.draw_condition_holds().then_some(Outcome::Draw)
    }

    /// Returns whether the configured draw condition is met.
    fn draw_condition_holds(&self) -> bool {
        let full = victory::is_full(self.state.board.cells());
        match self.options.draw_condition {
            DrawCondition::BoardFull => full,
            DrawCondition::BoardFullOrDeckEmpty => full || self.state.deck.is_empty(),
        }
    }
}
