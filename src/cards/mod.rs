//! Card system: cards, sides, and dealing.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identifier
//! - `Card`: Four fixed power values plus a mutable owner
//! - `Direction`: The four sides / orthogonal board directions
//! - `Deck`: Pooled cards that can be shuffled and dealt to both seats

pub mod card;
pub mod deck;
pub mod direction;

pub use card::{Card, CardId};
pub use deck::Deck;
pub use direction::Direction;
