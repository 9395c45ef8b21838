//! The four sides of a card.

use serde::{Deserialize, Serialize};

/// A side of a card, and the matching orthogonal direction on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// All directions, in capture evaluation order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// The side that faces this one across a shared edge.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (row, col) step on the board. Row 1 is the top row.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
