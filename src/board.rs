//! The 3×3 cell grid.

use core::fmt;

/// Number of cells on the board.
pub const GRID_SIZE: usize = 9;

/// Width of one board row.
pub const ROW_WIDTH: usize = 3;

/// The mark a player leaves on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(pub char);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by the player owning this symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns whether the cell holds no mark.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the symbol, if any.
    #[must_use]
    pub const fn symbol(&self) -> Option<Symbol> {
        match self {
            Self::Empty => None,
            Self::Occupied(symbol) => Some(*symbol),
        }
    }
}

/// A 3×3 board in row-major order (indices 0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; GRID_SIZE],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    /// Creates a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns all cells.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; GRID_SIZE] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns a copy of the board with `index` marked.
    ///
    /// Returns `None` when the index is out of bounds or the cell is taken;
    /// occupied cells are never overwritten.
    #[must_use]
    pub fn with_mark(&self, index: usize, symbol: Symbol) -> Option<Self> {
        if !self.get(index)?.is_empty() {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Cell::Occupied(symbol);
        Some(next)
    }

    /// Iterates over the indices of empty cells in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty_indices().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(ROW_WIDTH).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{}", row_index * ROW_WIDTH + col)?,
                    Cell::Occupied(symbol) => write!(f, "{symbol}")?,
                }
            }
        }
        Ok(())
    }
}
