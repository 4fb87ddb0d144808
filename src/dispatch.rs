//! Single-move validation and application.
//!
//! The dispatcher functions are pure: they take the current pieces of state
//! and return replacements, or a reason the move is rejected. They never
//! touch turn order or victory; the session does that afterwards.

use crate::board::{Board, GRID_SIZE, Symbol};
use crate::deck::Deck;
use crate::error::{DeckUnderflowError, InvalidMoveError};
use crate::hand::Hand;

/// Marks `index` with `symbol`.
///
/// Preconditions are checked in order: the index is on the board, the cell
/// is empty, and the player is authorized (`is_active`). Authorization is
/// computed by the caller.
///
/// # Errors
///
/// Returns [`InvalidMoveError::CellOutOfBounds`],
/// [`InvalidMoveError::CellOccupied`] or [`InvalidMoveError::NotActivePlayer`]
/// for the first failing precondition.
pub fn click_cell(
    board: &Board,
    index: usize,
    symbol: Symbol,
    is_active: bool,
) -> Result<Board, InvalidMoveError> {
    if index >= GRID_SIZE {
        return Err(InvalidMoveError::CellOutOfBounds);
    }
    if !board.cells()[index].is_empty() {
        return Err(InvalidMoveError::CellOccupied);
    }
    if !is_active {
        return Err(InvalidMoveError::NotActivePlayer);
    }

    board
        .with_mark(index, symbol)
        .ok_or(InvalidMoveError::CellOccupied)
}

/// Moves the top `n` cards of `deck` into `hand`.
///
/// Returns the shrunken deck and the grown hand.
///
/// # Errors
///
/// Returns an error if the deck holds fewer than `n` cards.
pub fn draw_cards(deck: &Deck, hand: &Hand, n: usize) -> Result<(Deck, Hand), DeckUnderflowError> {
    let (drawn, rest) = deck.draw_top(n)?;
    Ok((rest, hand.receiving(&drawn)))
}
