//! Board: the 4×4 grid, coordinates, and capture resolution.
//!
//! ## Key Types
//!
//! - `Position`: Validated 1-based (row, col)
//! - `Board`: Cell storage, placement, capture, ownership queries
//! - `Placement`: What a successful placement changed

pub mod grid;
pub mod position;

pub use grid::{Board, Captures, Placement};
pub use position::Position;

/// Rows and columns per side.
pub const BOARD_SIZE: usize = 4;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
