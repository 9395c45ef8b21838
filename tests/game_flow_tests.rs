//! End-to-end game flow tests.
//!
//! These tests play whole turns through `Game` and check hands, turn order,
//! history and the final result.

use skystones::{
    Card, CardId, Deck, Game, GameConfig, GameResult, GameStatus, MoveError, PlayerId, SetupError,
};

fn stone(id: u32, powers: [u8; 4], owner: PlayerId) -> Card {
    let [top, bottom, left, right] = powers;
    Card::new(CardId::new(id), format!("Stone {}", id), top, bottom, left, right).with_owner(owner)
}

/// Eight zero-power cards per seat; nothing ever flips.
fn flat_game() -> Game {
    let host = (1..=8).map(|id| stone(id, [0; 4], PlayerId::Host)).collect();
    let visitor = (9..=16).map(|id| stone(id, [0; 4], PlayerId::Visitor)).collect();
    Game::new(host, visitor).unwrap()
}

// =============================================================================
// Capture Through Turns
// =============================================================================

/// A weaker attacking side leaves the defender alone.
#[test]
fn test_weaker_side_no_flip() {
    let host = vec![stone(1, [3, 4, 2, 5], PlayerId::Host)];
    let visitor = vec![stone(2, [4, 3, 3, 2], PlayerId::Visitor)];
    let mut game = Game::new(host, visitor).unwrap();

    game.play_turn(CardId::new(1), 1, 1).unwrap();
    let record = game.play_turn(CardId::new(2), 1, 2).unwrap();

    assert!(record.captured.is_empty());
    assert_eq!(game.board().get_card(1, 1).and_then(Card::owner), Some(PlayerId::Host));
    assert_eq!(game.score()[PlayerId::Host], 1);
    assert_eq!(game.score()[PlayerId::Visitor], 1);
}

/// A stronger attacking side flips the defender.
#[test]
fn test_stronger_side_flips() {
    let host = vec![stone(1, [3, 4, 2, 5], PlayerId::Host)];
    let visitor = vec![stone(2, [4, 3, 6, 2], PlayerId::Visitor)];
    let mut game = Game::new(host, visitor).unwrap();

    game.play_turn(CardId::new(1), 1, 1).unwrap();
    let record = game.play_turn(CardId::new(2), 1, 2).unwrap();

    assert_eq!(record.captured.len(), 1);
    assert_eq!(game.board().get_card(1, 1).and_then(Card::owner), Some(PlayerId::Visitor));
    assert_eq!(game.score()[PlayerId::Visitor], 2);
    assert_eq!(game.score()[PlayerId::Host], 0);
}

// =============================================================================
// Failed Moves
// =============================================================================

/// Every rejected move leaves hands, board, turn and history untouched.
#[test]
fn test_failed_moves_change_nothing() {
    let mut game = flat_game();
    game.play_turn(CardId::new(1), 2, 2).unwrap();
    let before = game.clone();

    let attempts = [
        (CardId::new(9), 2, 2, MoveError::CellOccupied { row: 2, col: 2 }),
        (CardId::new(9), 0, 3, MoveError::InvalidCoordinates { row: 0, col: 3 }),
        (CardId::new(9), 3, 5, MoveError::InvalidCoordinates { row: 3, col: 5 }),
        (
            CardId::new(2),
            1,
            1,
            MoveError::WrongOwner {
                card: CardId::new(2),
                player: PlayerId::Visitor,
                owner: Some(PlayerId::Host),
            },
        ),
        (CardId::new(1), 1, 1, MoveError::CardNotInHand { card: CardId::new(1) }),
        (CardId::new(42), 1, 1, MoveError::CardNotInHand { card: CardId::new(42) }),
    ];

    for (card, row, col, expected) in attempts {
        assert_eq!(game.play_turn(card, row, col), Err(expected));
        assert_eq!(game.current_player(), before.current_player());
        assert_eq!(game.turn_number(), before.turn_number());
        assert_eq!(game.history(), before.history());
        for seat in PlayerId::ALL {
            assert_eq!(game.hand(seat), before.hand(seat));
        }
        assert_eq!(game.board().occupied_count(), 1);
    }

    // The rejected card is still playable.
    assert!(game.play_turn(CardId::new(9), 1, 1).is_ok());
}

// =============================================================================
// Full Games
// =============================================================================

/// Sixteen turns fill the board, then the game refuses further moves.
#[test]
fn test_full_game_ends_in_tie() {
    let mut game = flat_game();
    let mut expected_player = PlayerId::Host;
    let mut host_cards = 1..=8;
    let mut visitor_cards = 9..=16;

    for index in 0..16 {
        let (row, col) = (index / 4 + 1, index % 4 + 1);
        let id = match expected_player {
            PlayerId::Host => host_cards.next(),
            PlayerId::Visitor => visitor_cards.next(),
        }
        .unwrap();

        assert_eq!(game.current_player(), expected_player);
        assert_eq!(game.status(), GameStatus::InProgress);

        let record = game.play_turn(CardId::new(id), row, col).unwrap();
        assert_eq!(record.turn, index as u32 + 1);
        expected_player = expected_player.other();
    }

    assert!(game.is_game_over());
    assert_eq!(game.history().len(), 16);
    assert!(game.hand(PlayerId::Host).is_empty());
    assert!(game.hand(PlayerId::Visitor).is_empty());
    assert_eq!(game.check_winner(), GameResult::Tie);
    assert_eq!(game.status(), GameStatus::Finished(GameResult::Tie));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.play_turn(CardId::new(1), 1, 1), Err(MoveError::GameOver));
}

/// A game where Host's cards dominate every comparison.
#[test]
fn test_full_game_with_winner() {
    let host = (1..=8).map(|id| stone(id, [9; 4], PlayerId::Host)).collect();
    let visitor = (9..=16).map(|id| stone(id, [1; 4], PlayerId::Visitor)).collect();
    let mut game = Game::new(host, visitor).unwrap();

    while !game.is_game_over() {
        let next = game.legal_moves()[0];
        game.play_turn(next.card, next.position.row(), next.position.col()).unwrap();
    }

    let score = game.score();
    assert_eq!(score[PlayerId::Host] + score[PlayerId::Visitor], 16);
    assert!(score[PlayerId::Host] > score[PlayerId::Visitor]);
    assert_eq!(game.check_winner(), GameResult::Winner(PlayerId::Host));
}

/// The opening seat can be configured.
#[test]
fn test_visitor_opens() {
    let config = GameConfig::new().with_first_player(PlayerId::Visitor);
    let host = vec![stone(1, [1; 4], PlayerId::Host)];
    let visitor = vec![stone(2, [1; 4], PlayerId::Visitor)];
    let mut game = Game::with_config(config, host, visitor).unwrap();

    assert!(game.play_turn(CardId::new(1), 1, 1).is_err());
    let record = game.play_turn(CardId::new(2), 1, 1).unwrap();

    assert_eq!(record.player, PlayerId::Visitor);
    assert_eq!(game.current_player(), PlayerId::Host);
}

// =============================================================================
// Dealing
// =============================================================================

fn pool(size: u32) -> Deck {
    Deck::new((1..=size).map(|id| Card::new(CardId::new(id), format!("Stone {}", id), 1, 2, 3, 4)))
        .unwrap()
}

#[test]
fn test_deal_same_seed_same_hands() {
    let a = Game::deal(GameConfig::default(), pool(20), 7).unwrap();
    let b = Game::deal(GameConfig::default(), pool(20), 7).unwrap();

    for seat in PlayerId::ALL {
        let ids_a: Vec<_> = a.hand(seat).iter().map(Card::id).collect();
        let ids_b: Vec<_> = b.hand(seat).iter().map(Card::id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(ids_a.len(), 8);
    }
}

#[test]
fn test_deal_small_pool_fails() {
    let err = Game::deal(GameConfig::default(), pool(10), 7).unwrap_err();

    assert_eq!(
        err,
        SetupError::DeckTooSmall {
            available: 10,
            required: 16,
        }
    );
}

#[test]
fn test_deal_respects_hand_size() {
    let config = GameConfig::new().with_max_hand_size(3);
    let game = Game::deal(config, pool(16), 99).unwrap();

    assert_eq!(game.hand(PlayerId::Host).len(), 3);
    assert_eq!(game.hand(PlayerId::Visitor).len(), 3);
    assert!(game.hand(PlayerId::Visitor).iter().all(|c| c.is_owned_by(PlayerId::Visitor)));
}

#[test]
fn test_deal_oversized_hand_limit_fails() {
    let config = GameConfig::new().with_max_hand_size(usize::MAX);

    let err = Game::deal(config, pool(16), 1).unwrap_err();

    assert_eq!(
        err,
        SetupError::DeckTooSmall {
            available: 16,
            required: usize::MAX,
        }
    );
}
