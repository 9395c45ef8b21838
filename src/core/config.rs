//! Game configuration.
//!
//! The board is always 4×4 and the capture rule is fixed. What a table can
//! configure is who opens, how large a hand may be, and what happens to
//! cards that arrive in a hand without an owner.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::board::CELL_COUNT;

/// Default hand limit: each seat fills half of the board.
pub const DEFAULT_HAND_SIZE: usize = CELL_COUNT / 2;

/// Table configuration for a single game.
///
/// ```
/// use skystones::core::{GameConfig, PlayerId};
///
/// let config = GameConfig::new()
///     .with_first_player(PlayerId::Visitor)
///     .claim_unowned();
///
/// assert_eq!(config.first_player, PlayerId::Visitor);
/// assert_eq!(config.max_hand_size, 8);
/// assert!(config.claim_unowned);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seat that takes the first turn.
    pub first_player: PlayerId,

    /// Maximum number of cards a hand may start with.
    pub max_hand_size: usize,

    /// Assign unowned cards to the seat whose hand holds them at setup.
    ///
    /// When false, unowned cards stay unowned and are rejected on play.
    pub claim_unowned: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: PlayerId::Host,
            max_hand_size: DEFAULT_HAND_SIZE,
            claim_unowned: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening seat.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Let seats claim unowned cards in their hand.
    #[must_use]
    pub fn claim_unowned(mut self) -> Self {
        self.claim_unowned = true;
        self
    }
}
