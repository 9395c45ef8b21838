//! Skystone cards.
//!
//! A card's four power values are fixed when it is created. The only thing
//! that changes during a game is who owns it, and the crate keeps that write
//! to itself: the board flips owners on capture, and setup assigns owners
//! when dealing or claiming.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::core::player::PlayerId;

/// Stable card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card with four directional power values.
///
/// Equality and hashing go by `id` alone.
///
/// ## Example
///
/// ```
/// use skystones::cards::{Card, CardId, Direction};
/// use skystones::core::PlayerId;
///
/// let chomp = Card::new(CardId::new(1), "Rock Chomp", 3, 4, 2, 5)
///     .with_owner(PlayerId::Host);
///
/// assert_eq!(chomp.right(), 5);
/// assert_eq!(chomp.power(Direction::Bottom), 4);
/// assert_eq!(chomp.owner(), Some(PlayerId::Host));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    top: u8,
    bottom: u8,
    left: u8,
    right: u8,
    owner: Option<PlayerId>,
}

impl Card {
    /// Create an unowned card.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        top: u8,
        bottom: u8,
        left: u8,
        right: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            top,
            bottom,
            left,
            right,
            owner: None,
        }
    }

    /// Assign the original holder (builder pattern).
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Display label. Not used by the rules.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn top(&self) -> u8 {
        self.top
    }

    #[must_use]
    pub fn bottom(&self) -> u8 {
        self.bottom
    }

    #[must_use]
    pub fn left(&self) -> u8 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u8 {
        self.right
    }

    /// Power value on the given side.
    #[must_use]
    pub fn power(&self, side: Direction) -> u8 {
        match side {
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Current owner. `None` for a card that has not been assigned yet.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Check if the card is owned by `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{} T:{} B:{} L:{} R:{}",
            self.name, self.top, self.bottom, self.left, self.right
        )?;
        match self.owner {
            Some(owner) => write!(f, " Owner:{}>", owner),
            None => f.write_str(" Owner:none>"),
        }
    }
}
