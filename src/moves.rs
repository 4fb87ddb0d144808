//! Move requests.
//!
//! A move is a kind (the verb), an ordered list of integer arguments (the
//! nouns) and the acting player. Moves are plain data; the session decides
//! whether to accept them.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::board::GRID_SIZE;
use crate::error::InvalidMoveError;

/// The kinds of move this game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Mark a cell. Arguments: `[cell_index]`.
    ClickCell,
    /// Draw cards from the deck into the acting player's hand. No arguments.
    Draw,
}

impl MoveKind {
    /// Returns the wire name of the move kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClickCell => "clickCell",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoveKind {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clickCell" => Ok(Self::ClickCell),
            "draw" => Ok(Self::Draw),
            _ => Err(InvalidMoveError::UnknownKind),
        }
    }
}

/// A move request from one player.
///
/// ## Example
///
/// ```
/// use cardtac::{Move, MoveKind};
///
/// let click = Move::click_cell(0, 4);
/// assert_eq!(click.kind, MoveKind::ClickCell);
/// assert_eq!(click.args, vec![4]);
///
/// let parsed = Move::parse("clickCell", vec![4], 0).unwrap();
/// assert_eq!(parsed, click);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// The kind of move.
    pub kind: MoveKind,
    /// Ordered move arguments.
    pub args: Vec<i64>,
    /// Seat of the acting player.
    pub player: u8,
}

impl Move {
    /// Creates a move.
    #[must_use]
    pub const fn new(kind: MoveKind, args: Vec<i64>, player: u8) -> Self {
        Self { kind, args, player }
    }

    /// Creates a move from a wire kind name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError::UnknownKind`] if `kind` is not recognized.
    pub fn parse(kind: &str, args: Vec<i64>, player: u8) -> Result<Self, InvalidMoveError> {
        Ok(Self::new(kind.parse()?, args, player))
    }

    /// Creates a `clickCell` move.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "cell indices are tiny")]
    pub fn click_cell(player: u8, index: usize) -> Self {
        Self::new(MoveKind::ClickCell, alloc::vec![index as i64], player)
    }

    /// Creates a `draw` move.
    #[must_use]
    pub const fn draw(player: u8) -> Self {
        Self::new(MoveKind::Draw, Vec::new(), player)
    }

    /// Reads the target cell of a `clickCell` move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError::BadArguments`] unless there is exactly one
    /// argument, and [`InvalidMoveError::CellOutOfBounds`] if it is negative
    /// or past the grid.
    pub fn cell_index(&self) -> Result<usize, InvalidMoveError> {
        let [index] = self.args.as_slice() else {
            return Err(InvalidMoveError::BadArguments);
        };
        usize::try_from(*index)
            .ok()
            .filter(|&index| index < GRID_SIZE)
            .ok_or(InvalidMoveError::CellOutOfBounds)
    }

    /// Checks that a move kind taking no arguments got none.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError::BadArguments`] if any argument is present.
    pub fn expect_no_args(&self) -> Result<(), InvalidMoveError> {
        if self.args.is_empty() {
            Ok(())
        } else {
            Err(InvalidMoveError::BadArguments)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} {}{:?}", self.player, self.kind, self.args)
    }
}
