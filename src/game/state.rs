//! Turn sequencing and terminal scoring.
//!
//! `Game` owns both hands and the turn pointer, and drives the board one
//! placement per turn. It never writes to the board except through
//! `Board::place_card`.
//!
//! ## State machine
//!
//! `InProgress` until the board is full, then `Finished`. Every successful
//! `play_turn` removes one card from the active hand and passes the turn.
//! A failed `play_turn` changes nothing.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::moves::{Move, MoveRecord};
use crate::board::Board;
use crate::cards::{Card, CardId, Deck};
use crate::core::config::GameConfig;
use crate::core::error::{MoveError, SetupError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::rules::{GameResult, Score};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished(GameResult),
}

/// A game between Host and Visitor.
///
/// ## Example
///
/// ```
/// use skystones::cards::{Card, CardId};
/// use skystones::core::PlayerId;
/// use skystones::game::Game;
///
/// let host = vec![Card::new(CardId::new(1), "Rock Chomp", 3, 4, 2, 5).with_owner(PlayerId::Host)];
/// let visitor = vec![Card::new(CardId::new(2), "Flame Blast", 4, 3, 6, 2).with_owner(PlayerId::Visitor)];
/// let mut game = Game::new(host, visitor).unwrap();
///
/// game.play_turn(CardId::new(1), 1, 1).unwrap();
/// let record = game.play_turn(CardId::new(2), 1, 2).unwrap();
///
/// assert_eq!(record.captured.len(), 1);
/// assert_eq!(game.board().count_owner_cards(PlayerId::Visitor), 2);
/// assert_eq!(game.current_player(), PlayerId::Host);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    hands: PlayerMap<Vec<Card>>,
    turn_order: [PlayerId; 2],
    current_turn: usize,
    turn_number: u32,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Start a game with the default configuration.
    pub fn new(host_cards: Vec<Card>, visitor_cards: Vec<Card>) -> Result<Self, SetupError> {
        Self::with_config(GameConfig::default(), host_cards, visitor_cards)
    }

    /// Start a game from two ordered hands.
    ///
    /// Rejects duplicate card IDs across both hands, cards owned by the other
    /// seat, and hands over `config.max_hand_size`.
    pub fn with_config(
        config: GameConfig,
        host_cards: Vec<Card>,
        visitor_cards: Vec<Card>,
    ) -> Result<Self, SetupError> {
        let mut hands = PlayerMap::from_parts(host_cards, visitor_cards);
        let mut seen = FxHashSet::default();

        for (seat, hand) in hands.iter_mut() {
            if hand.len() > config.max_hand_size {
                return Err(SetupError::HandTooLarge {
                    player: seat,
                    size: hand.len(),
                    max: config.max_hand_size,
                });
            }

            for card in hand.iter_mut() {
                if !seen.insert(card.id()) {
                    return Err(SetupError::DuplicateCard(card.id()));
                }
                match card.owner() {
                    Some(owner) if owner != seat => {
                        return Err(SetupError::ForeignCard {
                            card: card.id(),
                            seat,
                            owner,
                        });
                    }
                    None if config.claim_unowned => card.set_owner(seat),
                    _ => {}
                }
            }
        }

        let first = config.first_player;
        log::debug!(
            "new game: {} cards for Host, {} for Visitor, {} opens",
            hands[PlayerId::Host].len(),
            hands[PlayerId::Visitor].len(),
            first
        );

        Ok(Self {
            config,
            board: Board::new(),
            hands,
            turn_order: [first, first.other()],
            current_turn: 0,
            turn_number: 1,
            history: Vector::new(),
        })
    }

    /// Shuffle a pooled deck with `seed` and deal `config.max_hand_size`
    /// cards to each seat, alternating from the opening seat.
    pub fn deal(config: GameConfig, mut deck: Deck, seed: u64) -> Result<Self, SetupError> {
        let mut rng = GameRng::new(seed).for_context("deal");
        deck.shuffle(&mut rng);

        let (host, visitor) = deck
            .deal(config.max_hand_size, config.first_player)?
            .into_parts();
        Self::with_config(config, host, visitor)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards still in a seat's hand, in their original order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn_order[self.current_turn % self.turn_order.len()]
    }

    /// Pass the turn to the other seat.
    pub fn next_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.turn_order.len();
        log::trace!("turn passes to {}", self.current_player());
    }

    /// Number of the turn about to be played (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Play `card` from the current player's hand onto (`row`, `col`).
    ///
    /// Checks, in order: the board is not full (`GameOver`), the card is in a
    /// hand (`CardNotInHand`), it belongs to the current player
    /// (`WrongOwner`), and the cell is valid and empty
    /// (`InvalidCoordinates`, `CellOccupied`). On any error the game is
    /// unchanged; on success the card leaves the hand, captures resolve, and
    /// the turn passes.
    pub fn play_turn(&mut self, card: CardId, row: usize, col: usize) -> Result<MoveRecord, MoveError> {
        let result = self.try_play_turn(card, row, col);
        if let Err(err) = &result {
            log::debug!("{} rejected: {}", self.current_player(), err);
        }
        result
    }

    fn try_play_turn(&mut self, card: CardId, row: usize, col: usize) -> Result<MoveRecord, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player();
        let (seat, index) = self.locate(card).ok_or(MoveError::CardNotInHand { card })?;
        let owner = self.hands[seat][index].owner();
        if owner != Some(player) {
            return Err(MoveError::WrongOwner {
                card,
                player,
                owner,
            });
        }

        self.board.ensure_vacant(row, col)?;

        let played = self.hands[seat].remove(index);
        let placement = self.board.place_card(row, col, played)?;
        let record = MoveRecord::new(player, placement, self.turn_number);
        self.history.push_back(record.clone());
        self.turn_number = self.turn_number.saturating_add(1);

        if self.is_game_over() {
            log::info!("game over after {} turns: {}", self.history.len(), self.check_winner());
        }
        self.next_turn();

        Ok(record)
    }

    /// Find a card in either hand.
    fn locate(&self, card: CardId) -> Option<(PlayerId, usize)> {
        self.hands.iter().find_map(|(seat, hand)| {
            hand.iter()
                .position(|c| c.id() == card)
                .map(|index| (seat, index))
        })
    }

    /// True once every cell is occupied.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
    }

    /// Compare owned-cell counts: strictly more wins, equal ties.
    #[must_use]
    pub fn check_winner(&self) -> GameResult {
        GameResult::from_score(&self.score())
    }

    /// Owned-cell counts for both seats.
    #[must_use]
    pub fn score(&self) -> Score {
        self.board.ownership()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Finished(self.check_winner())
        } else {
            GameStatus::InProgress
        }
    }

    /// Every move the current player could make right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }

        let player = self.current_player();
        let empty: Vec<_> = self.board.empty_positions().collect();

        self.hands[player]
            .iter()
            .filter(|card| card.is_owned_by(player))
            .flat_map(|card| empty.iter().map(move |&pos| Move::new(card.id(), pos)))
            .collect()
    }
}
