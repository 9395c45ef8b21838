//! Terminal scoring.
//!
//! The game ends when the board is full. Each seat scores one point per cell
//! it owns; strictly more points wins and equal points tie.

pub mod outcome;

pub use outcome::{GameResult, Score};
