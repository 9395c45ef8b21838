//! Pooled decks and dealing.
//!
//! A `Deck` is an ordered pile of unique cards (top = end of vec). Dealing
//! takes cards off the top one at a time, alternating seats, and stamps each
//! dealt card with the seat that received it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::error::SetupError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;

/// An ordered pile of cards with unique IDs.
///
/// Serializes as its card list; deserializing re-runs the duplicate check.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck. The last card is the top of the pile.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, SetupError> {
        let cards: Vec<Card> = cards.into_iter().collect();
        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.id()) {
                return Err(SetupError::DuplicateCard(card.id()));
            }
        }
        Ok(Self { cards })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Take the top card off the pile.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `hand_size` cards to each seat, alternating, starting with `first`.
    ///
    /// Each dealt card becomes owned by the seat that receives it. Fails
    /// without touching the pile if there are not enough cards.
    pub fn deal(
        &mut self,
        hand_size: usize,
        first: PlayerId,
    ) -> Result<PlayerMap<Vec<Card>>, SetupError> {
        let required = hand_size.checked_mul(2).unwrap_or(usize::MAX);
        if self.cards.len() < required {
            return Err(SetupError::DeckTooSmall {
                available: self.cards.len(),
                required,
            });
        }

        let mut hands: PlayerMap<Vec<Card>> = PlayerMap::new(|_| Vec::with_capacity(hand_size));
        let mut seat = first;
        for _ in 0..required {
            if let Some(mut card) = self.draw() {
                card.set_owner(seat);
                hands[seat].push(card);
            }
            seat = seat.other();
        }

        log::debug!(
            "dealt {} cards per seat, {} left in deck",
            hand_size,
            self.cards.len()
        );
        Ok(hands)
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = SetupError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}
