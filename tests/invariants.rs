use proptest::prelude::*;
use seahaven::board::Board;
use seahaven::command::Command;
use seahaven::game::Game;
use seahaven::moves::Move;

// Indices run one past each range so out-of-range inputs are exercised too.
fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        (0usize..11, 0usize..11).prop_map(|(from, to)| Move::TableauToTableau { from, to }),
        (0usize..11, 0usize..5).prop_map(|(from, cell)| Move::TableauToCell { from, cell }),
        (0usize..5, 0usize..11).prop_map(|(cell, to)| Move::CellToTableau { cell, to }),
        (0usize..11, 0usize..5).prop_map(|(from, pile)| Move::TableauToFoundation { from, pile }),
        (0usize..5, 0usize..5).prop_map(|(cell, pile)| Move::CellToFoundation { cell, pile }),
    ]
}

/// Prefer legal moves so runs get deep into a game instead of bouncing off
/// the rules.
fn pick_legal(board: &Board, choice: usize) -> Option<Move> {
    let legal = board.legal_moves();
    if legal.is_empty() {
        None
    } else {
        Some(legal[choice % legal.len()])
    }
}

proptest! {
    #[test]
    fn arbitrary_moves_preserve_invariants(seed in any::<u64>(), moves in prop::collection::vec(any_move(), 1..200)) {
        let mut board = Board::deal_seeded(seed);
        for mv in moves {
            let before = board.clone();
            match board.apply(mv) {
                Ok(()) => prop_assert_ne!(&board, &before),
                Err(_) => prop_assert_eq!(&board, &before),
            }
            prop_assert_eq!(board.card_count(), 52);
            prop_assert!(board.is_consistent());
        }
    }

    #[test]
    fn legal_play_preserves_invariants(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..300)) {
        let mut board = Board::deal_seeded(seed);
        for choice in choices {
            let Some(mv) = pick_legal(&board, choice) else { break };
            prop_assert!(board.apply(mv).is_ok());
            prop_assert_eq!(board.card_count(), 52);
            prop_assert!(board.is_consistent());
            for pile in board.piles() {
                for (i, card) in pile.iter().enumerate() {
                    prop_assert_eq!(usize::from(card.rank().value()), i + 1);
                    prop_assert_eq!(card.suit(), pile[0].suit());
                }
            }
        }
    }

    #[test]
    fn session_commands_keep_52_cards(seed in any::<u64>(), moves in prop::collection::vec(any_move(), 1..100)) {
        let mut game = Game::seeded(seed);
        for (i, mv) in moves.into_iter().enumerate() {
            let cmd = if i % 37 == 36 { Command::Restart } else { Command::Move(mv) };
            let _ = game.execute(cmd);
            prop_assert_eq!(game.board().card_count(), 52);
            prop_assert!(game.board().is_consistent());
        }
    }
}
