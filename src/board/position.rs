//! Board coordinates.
//!
//! Positions are 1-based: row 1 is the top row, column 1 the leftmost.

use serde::{Deserialize, Serialize};

use super::{BOARD_SIZE, CELL_COUNT};
use crate::cards::Direction;

/// A validated cell coordinate on the 4×4 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a position. Returns `None` unless both coordinates are in `1..=4`.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Check that both coordinates are in `1..=4`.
    #[must_use]
    pub const fn in_bounds(row: usize, col: usize) -> bool {
        row >= 1 && row <= BOARD_SIZE && col >= 1 && col <= BOARD_SIZE
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Row-major cell index in `0..16`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row - 1) * BOARD_SIZE + (self.col - 1)
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: index / BOARD_SIZE + 1,
                col: index % BOARD_SIZE + 1,
            })
        } else {
            None
        }
    }

    /// The adjacent cell in `direction`, or `None` past the edge.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Self::new(row, col)
    }

    /// All 16 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.row, self.col)
    }
}
