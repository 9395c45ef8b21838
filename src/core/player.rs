//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Skystones is always played between two seats: the `Host`, who moves first
//! by default, and the `Visitor`.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    Host,
    Visitor,
}

impl PlayerId {
    /// Both seats, in default turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::Host, PlayerId::Visitor];

    /// Get the seat index (Host = 0, Visitor = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Host => 0,
            PlayerId::Visitor => 1,
        }
    }

    /// Get the opposing seat.
    #[must_use]
    pub const fn other(self) -> PlayerId {
        match self {
            PlayerId::Host => PlayerId::Visitor,
            PlayerId::Visitor => PlayerId::Host,
        }
    }

    /// Seat name for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerId::Host => "Host",
            PlayerId::Visitor => "Visitor",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use skystones::core::{PlayerId, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::with_value(0);
/// captures[PlayerId::Visitor] += 2;
///
/// assert_eq!(captures[PlayerId::Host], 0);
/// assert_eq!(captures[PlayerId::Visitor], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::Host), factory(PlayerId::Visitor)],
        }
    }

    /// Create a PlayerMap from the Host and Visitor values.
    pub fn from_parts(host: T, visitor: T) -> Self {
        Self {
            data: [host, visitor],
        }
    }

    /// Split into the Host and Visitor values.
    pub fn into_parts(self) -> (T, T) {
        let [host, visitor] = self.data;
        (host, visitor)
    }

    /// Create a PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
