//! Property tests for capture and move validation.

use proptest::prelude::*;

use skystones::{Board, Card, CardId, Direction, Game, PlayerId, Position};

fn stone(id: u32, powers: [u8; 4], owner: PlayerId) -> Card {
    let [top, bottom, left, right] = powers;
    Card::new(CardId::new(id), format!("Stone {}", id), top, bottom, left, right).with_owner(owner)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn interior() -> impl Strategy<Value = Position> {
    (2usize..=3, 2usize..=3).prop_map(|(row, col)| Position::new(row, col).unwrap())
}

proptest! {
    /// A single opposing neighbor flips exactly when the attacking side is
    /// strictly greater than the facing side.
    #[test]
    fn prop_flip_iff_strictly_greater(
        attack in 0u8..=10,
        defense in 0u8..=10,
        side in direction(),
        origin in interior(),
    ) {
        let target = origin.neighbor(side).unwrap();
        let mut defender = [0u8; 4];
        defender[side.opposite() as usize] = defense;
        let mut attacker = [0u8; 4];
        attacker[side as usize] = attack;

        let mut board = Board::new();
        board.place_card(target.row(), target.col(), stone(1, defender, PlayerId::Visitor)).unwrap();
        let placement = board
            .place_card(origin.row(), origin.col(), stone(2, attacker, PlayerId::Host))
            .unwrap();

        let flipped = board.get(target).and_then(Card::owner) == Some(PlayerId::Host);
        prop_assert_eq!(flipped, attack > defense);
        prop_assert_eq!(placement.captured.len(), usize::from(attack > defense));
    }

    /// Ownership counts always add up to the number of placed cards.
    #[test]
    fn prop_ownership_sums_to_occupied(
        cells in prop::collection::btree_set(0usize..16, 1..=16),
        powers in prop::collection::vec(prop::array::uniform4(0u8..=10), 16),
    ) {
        let mut board = Board::new();
        for (turn, index) in cells.iter().enumerate() {
            let position = Position::from_index(*index).unwrap();
            let owner = if turn % 2 == 0 { PlayerId::Host } else { PlayerId::Visitor };
            board
                .place_card(position.row(), position.col(), stone(turn as u32, powers[turn], owner))
                .unwrap();
        }

        let ownership = board.ownership();
        prop_assert_eq!(board.occupied_count(), cells.len());
        prop_assert_eq!(ownership[PlayerId::Host] + ownership[PlayerId::Visitor], cells.len());
    }

    /// Playing anywhere outside 1..=4 is rejected and changes nothing.
    #[test]
    fn prop_out_of_range_is_noop(row in 0usize..8, col in 0usize..8) {
        prop_assume!(!Position::in_bounds(row, col));

        let mut game = Game::new(
            vec![stone(1, [5; 4], PlayerId::Host)],
            vec![stone(2, [5; 4], PlayerId::Visitor)],
        )
        .unwrap();

        prop_assert!(game.play_turn(CardId::new(1), row, col).is_err());
        prop_assert_eq!(game.current_player(), PlayerId::Host);
        prop_assert_eq!(game.hand(PlayerId::Host).len(), 1);
        prop_assert_eq!(game.board().occupied_count(), 0);
        prop_assert!(game.history().is_empty());
    }
}
