//! Game flow: hands, turn order, move validation, and results.
//!
//! ## Key Types
//!
//! - `Game`: Owns the board and both hands, processes one placement per turn
//! - `GameStatus`: In progress or finished with a result
//! - `Move` / `MoveRecord`: Candidate moves and the history of played ones

pub mod moves;
pub mod state;

pub use moves::{Move, MoveRecord};
pub use state::{Game, GameStatus};
