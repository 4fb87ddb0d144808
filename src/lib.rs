//! A turn-based tic-tac-toe engine with a shared card deck and optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] session that owns the authoritative state,
//! validates and applies moves, detects victory and draws, deals and draws
//! from a data-driven card deck, and lists candidate moves for search-based
//! agents. Presentation layers read [`Snapshot`]s and submit [`Move`]s.
//!
//! # Example
//!
//! ```
//! use cardtac::{Game, GameOptions, Move, Outcome, Transition};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! for (player, cell) in [(0, 0), (1, 3), (0, 4), (1, 5)] {
//!     game.submit(&Move::click_cell(player, cell)).unwrap();
//! }
//! let outcome = game.submit(&Move::click_cell(0, 8)).unwrap();
//! assert_eq!(outcome.transition(), Some(Transition::GameOver(Outcome::Winner(0))));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod board;
pub mod card;
pub mod deck;
pub mod dispatch;
pub mod error;
pub mod game;
pub mod hand;
pub mod moves;
pub mod options;
pub mod result;
pub mod snapshot;
pub mod victory;

// Re-export main types
pub use board::{Board, Cell, GRID_SIZE, Symbol};
pub use card::{Card, CardId, Color, DEFAULT_DECK_SIZE};
pub use deck::{Deck, DeckComposition, RankCount};
pub use error::{ConfigError, DeckUnderflowError, InvalidMoveError, SessionError, SetupError};
pub use game::{Game, GameState, Turn, TurnPhase};
pub use hand::Hand;
pub use moves::{Move, MoveKind};
pub use options::{DrawCondition, GameOptions};
pub use result::{MoveOutcome, Outcome, Transition};
pub use snapshot::{CardView, HandSnapshot, Snapshot, Terminal, TurnSnapshot};
pub use victory::{is_victory, winning_symbol};
