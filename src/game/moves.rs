//! Moves and move history.
//!
//! A move is a card plus a target cell. Successful moves are recorded with
//! what they captured so a collaborator can replay or animate a game
//! without re-running the rules.

use serde::{Deserialize, Serialize};

use crate::board::{Captures, Placement, Position};
use crate::cards::CardId;
use crate::core::player::PlayerId;

/// A candidate move for the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: CardId,
    pub position: Position,
}

impl Move {
    #[must_use]
    pub fn new(card: CardId, position: Position) -> Self {
        Self { card, position }
    }
}

/// A move that was played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that moved.
    pub player: PlayerId,

    /// Card placed.
    pub card: CardId,

    /// Cell it was placed on.
    pub position: Position,

    /// Cells flipped to `player` by this move.
    pub captured: Captures,

    /// Turn number (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    /// Record a placement made by `player` on `turn`.
    #[must_use]
    pub fn new(player: PlayerId, placement: Placement, turn: u32) -> Self {
        Self {
            player,
            card: placement.card,
            position: placement.position,
            captured: placement.captured,
            turn,
        }
    }

    /// The move that produced this record.
    #[must_use]
    pub fn as_move(&self) -> Move {
        Move::new(self.card, self.position)
    }
}
