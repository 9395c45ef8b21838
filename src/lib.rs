//! # skystones
//!
//! Rules engine for Skystones, a two-player tile-capture card game played on
//! a 4×4 board.
//!
//! Each card carries four power values, one per side. Placing a card
//! compares each of its sides against the facing side of any orthogonal
//! neighbor owned by the opponent; strictly greater power flips that
//! neighbor. Play alternates until all sixteen cells are filled, and the
//! seat owning more cells wins.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, errors, RNG
//! - `cards`: Cards, sides, and dealing
//! - `board`: The grid, coordinates, and capture resolution
//! - `rules`: Terminal scoring
//! - `game`: Turn sequencing and move validation
//!
//! ## Example
//!
//! ```
//! use skystones::{Card, CardId, Game, GameStatus, PlayerId};
//!
//! let host = vec![Card::new(CardId::new(1), "Rock Chomp", 3, 4, 2, 5).with_owner(PlayerId::Host)];
//! let visitor = vec![Card::new(CardId::new(2), "Flame Blast", 4, 3, 3, 2).with_owner(PlayerId::Visitor)];
//! let mut game = Game::new(host, visitor)?;
//!
//! game.play_turn(CardId::new(1), 1, 1)?;
//! let record = game.play_turn(CardId::new(2), 1, 2)?;
//!
//! // Left 3 does not beat right 5.
//! assert!(record.captured.is_empty());
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

pub use crate::core::{GameConfig, GameRng, MoveError, PlayerId, PlayerMap, SetupError};

pub use crate::cards::{Card, CardId, Deck, Direction};

pub use crate::board::{Board, Captures, Placement, Position, BOARD_SIZE, CELL_COUNT};

pub use crate::rules::{GameResult, Score};

pub use crate::game::{Game, GameStatus, Move, MoveRecord};
