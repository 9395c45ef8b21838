//! Core engine types: players, configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_HAND_SIZE};
pub use error::{MoveError, SetupError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
