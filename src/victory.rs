//! Victory and draw detection.
//!
//! Everything here is a pure function of the cells and is recomputed after
//! every accepted move.

use crate::board::{Cell, GRID_SIZE, Symbol};

/// The eight winning triples: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

fn line_symbol(cells: &[Cell; GRID_SIZE], [a, b, c]: [usize; 3]) -> Option<Symbol> {
    let symbol = cells[a].symbol()?;
    (cells[b] == cells[a] && cells[c] == cells[a]).then_some(symbol)
}

/// Returns whether any triple holds three identical, non-empty cells.
#[must_use]
pub fn is_victory(cells: &[Cell; GRID_SIZE]) -> bool {
    winning_symbol(cells).is_some()
}

/// Returns the symbol of the first winning triple, if any.
#[must_use]
pub fn winning_symbol(cells: &[Cell; GRID_SIZE]) -> Option<Symbol> {
    WINNING_LINES
        .iter()
        .find_map(|&line| line_symbol(cells, line))
}

/// Returns whether every cell is occupied.
#[must_use]
pub fn is_full(cells: &[Cell; GRID_SIZE]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

/// Returns whether the board is full with no winning triple.
#[must_use]
pub fn is_draw(cells: &[Cell; GRID_SIZE]) -> bool {
    is_full(cells) && !is_victory(cells)
}
