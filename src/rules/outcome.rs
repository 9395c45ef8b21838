//! Game results and scoring.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};

/// Owned-cell count per seat.
pub type Score = PlayerMap<usize>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One seat owns strictly more cells.
    Winner(PlayerId),
    /// Equal counts.
    Tie,
}

impl GameResult {
    /// Decide the result from owned-cell counts.
    ///
    /// ```
    /// use skystones::core::{PlayerId, PlayerMap};
    /// use skystones::rules::GameResult;
    ///
    /// let score = PlayerMap::new(|p| if p == PlayerId::Host { 9 } else { 7 });
    /// assert_eq!(GameResult::from_score(&score), GameResult::Winner(PlayerId::Host));
    ///
    /// assert_eq!(GameResult::from_score(&PlayerMap::with_value(8)), GameResult::Tie);
    /// ```
    #[must_use]
    pub fn from_score(score: &Score) -> Self {
        let host = score[PlayerId::Host];
        let visitor = score[PlayerId::Visitor];

        match host.cmp(&visitor) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::Host),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Visitor),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{}", p),
            GameResult::Tie => f.write_str("Tie"),
        }
    }
}
