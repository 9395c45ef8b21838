//! The 4×4 grid and the capture rule.
//!
//! The board owns every placed card. A cell goes from empty to occupied
//! exactly once and is never cleared; after that only the occupant's owner
//! can change, and only through capture.
//!
//! ## Capture
//!
//! When a card is placed, each orthogonal neighbor is checked once, in the
//! order top, bottom, left, right. A neighbor owned by someone other than the
//! placing card's owner flips to that owner iff the placed card's power on
//! the shared side is strictly greater than the neighbor's power on the
//! opposite side. Ties hold. Flipped neighbors do not capture in turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::Position;
use super::CELL_COUNT;
use crate::cards::{Card, CardId, Direction};
use crate::core::error::MoveError;
use crate::core::player::{PlayerId, PlayerMap};

/// Cells flipped by a single placement. At most one per side.
pub type Captures = SmallVec<[Position; 4]>;

/// Outcome of a successful placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Where the card went.
    pub position: Position,

    /// The placed card.
    pub card: CardId,

    /// Neighbors that changed owner, in evaluation order.
    pub captured: Captures,
}

/// The game board.
///
/// ## Example
///
/// ```
/// use skystones::board::Board;
/// use skystones::cards::{Card, CardId};
/// use skystones::core::PlayerId;
///
/// let mut board = Board::new();
/// board
///     .place_card(1, 1, Card::new(CardId::new(1), "Rock Chomp", 3, 4, 2, 5).with_owner(PlayerId::Host))
///     .unwrap();
///
/// let placed = board
///     .place_card(1, 2, Card::new(CardId::new(2), "Flame Blast", 4, 3, 6, 2).with_owner(PlayerId::Visitor))
///     .unwrap();
///
/// // Visitor's left 6 beats Host's right 5
/// assert_eq!(placed.captured.len(), 1);
/// assert_eq!(board.count_owner_cards(PlayerId::Visitor), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Card>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `row` and `col` are both in `1..=4`.
    #[must_use]
    pub fn validate_coordinates(&self, row: usize, col: usize) -> bool {
        Position::in_bounds(row, col)
    }

    /// True iff the coordinates are valid and the cell holds no card.
    ///
    /// Out-of-range coordinates are reported as not empty, so a caller can
    /// reject a move with this check alone.
    #[must_use]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        Position::new(row, col).is_some_and(|pos| self.cells[pos.index()].is_none())
    }

    /// Get the occupant of a cell. Out-of-range coordinates yield `None`.
    #[must_use]
    pub fn get_card(&self, row: usize, col: usize) -> Option<&Card> {
        Position::new(row, col).and_then(|pos| self.get(pos))
    }

    /// Get the occupant at a validated position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Card> {
        self.cells[position.index()].as_ref()
    }

    /// Check that a card could be placed at (`row`, `col`) right now.
    ///
    /// This is the validation half of `place_card`, with the same errors.
    pub fn ensure_vacant(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        let position =
            Position::new(row, col).ok_or(MoveError::InvalidCoordinates { row, col })?;
        if self.cells[position.index()].is_some() {
            return Err(MoveError::CellOccupied { row, col });
        }
        Ok(position)
    }

    /// Place a card and resolve captures around it.
    ///
    /// Fails with `InvalidCoordinates` or `CellOccupied` and leaves the board
    /// untouched; the card is dropped in that case, so callers that need it
    /// back should check `ensure_vacant` first.
    pub fn place_card(&mut self, row: usize, col: usize, card: Card) -> Result<Placement, MoveError> {
        let position = self.ensure_vacant(row, col)?;
        let id = card.id();

        log::debug!("placing {} at {}", card, position);
        self.cells[position.index()] = Some(card);
        let captured = self.capture_adjacent(position);

        Ok(Placement {
            position,
            card: id,
            captured,
        })
    }

    /// Flip weaker opposing neighbors of the card at `position`.
    ///
    /// Every comparison uses the placed card's fixed powers and the
    /// neighbor's owner before this placement, so one flip never feeds
    /// another. An unowned card captures nothing.
    fn capture_adjacent(&mut self, position: Position) -> Captures {
        let mut captured = Captures::new();

        let Some(aggressor) = self.cells[position.index()].as_ref() else {
            return captured;
        };
        let Some(owner) = aggressor.owner() else {
            return captured;
        };
        let powers = Direction::ALL.map(|side| aggressor.power(side));

        for (side, power) in Direction::ALL.into_iter().zip(powers) {
            let Some(target) = position.neighbor(side) else {
                continue;
            };
            let Some(neighbor) = self.cells[target.index()].as_mut() else {
                continue;
            };
            if neighbor.is_owned_by(owner) {
                continue;
            }

            let defense = neighbor.power(side.opposite());
            if power > defense {
                log::debug!(
                    "{} captures {} at {} ({} > {})",
                    owner,
                    neighbor.id(),
                    target,
                    power,
                    defense
                );
                neighbor.set_owner(owner);
                captured.push(target);
            }
        }

        captured
    }

    /// Number of placed cards currently owned by `owner`.
    #[must_use]
    pub fn count_owner_cards(&self, owner: PlayerId) -> usize {
        self.cards().filter(|(_, card)| card.is_owned_by(owner)).count()
    }

    /// Owned-cell counts for both seats.
    #[must_use]
    pub fn ownership(&self) -> PlayerMap<usize> {
        PlayerMap::new(|player| self.count_owner_cards(player))
    }

    /// True iff every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Unoccupied cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |pos| self.cells[pos.index()].is_none())
    }

    /// Placed cards with their positions, row-major.
    pub fn cards(&self) -> impl Iterator<Item = (Position, &Card)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|card| (pos, card)))
    }
}
