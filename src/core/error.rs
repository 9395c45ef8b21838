//! Error types.
//!
//! Every error is recoverable: an operation that returns `Err` leaves the
//! board, hands and turn pointer exactly as they were.

use super::PlayerId;
use crate::cards::CardId;

/// A rejected placement or turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid coordinates {row}.{col}: use 1..4 for row and column")]
    InvalidCoordinates { row: usize, col: usize },

    #[error("cell {row}.{col} is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("{card} does not belong to {player}")]
    WrongOwner {
        card: CardId,
        player: PlayerId,
        owner: Option<PlayerId>,
    },

    #[error("{card} is not in any hand")]
    CardNotInHand { card: CardId },

    #[error("game is over: the board is full")]
    GameOver,
}

/// Invalid hands or deck handed to game setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("{card} in the {seat} hand is owned by {owner}")]
    ForeignCard {
        card: CardId,
        seat: PlayerId,
        owner: PlayerId,
    },

    #[error("{player} hand has {size} cards (max {max})")]
    HandTooLarge {
        player: PlayerId,
        size: usize,
        max: usize,
    },

    #[error("deck has {available} cards, {required} needed to deal")]
    DeckTooSmall { available: usize, required: usize },
}
