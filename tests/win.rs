use seahaven::board::{Board, NUM_PILES};
use seahaven::cards::{Card, Rank, Suit};
use seahaven::config::GameConfig;
use seahaven::game::{Game, HistoryEvent};

fn full_pile(suit: Suit) -> Vec<Card> {
    Rank::ALL.iter().map(|&r| Card::new(r, suit)).collect()
}

fn finished() -> Board {
    let mut board = Board::empty();
    for (pile, suit) in Suit::ALL.iter().enumerate() {
        board = board.with_pile(pile, full_pile(*suit));
    }
    board
}

#[test]
fn four_full_piles_win() {
    let board = finished();
    assert!(board.is_won());
    assert!(board.is_consistent());
    assert_eq!(board.foundation_len(), 52);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn a_short_pile_is_not_a_win() {
    let mut spades = full_pile(Suit::Spades);
    let king = spades.pop().unwrap();
    let board = finished().with_pile(NUM_PILES - 1, spades).with_column(0, vec![king]);
    assert!(!board.is_won());
    assert!(board.is_consistent());
    assert_eq!(board.foundation_len(), 51);
}

#[test]
fn last_card_home_wins() {
    let mut spades = full_pile(Suit::Spades);
    let king = spades.pop().unwrap();
    let mut board = finished().with_pile(NUM_PILES - 1, spades).with_cell(3, Some(king));
    board.move_cell_to_foundation(3, NUM_PILES - 1).unwrap();
    assert!(board.is_won());
    assert_eq!(board.cell(3), None);
}

#[test]
fn fresh_deals_are_never_won() {
    for seed in 0..20 {
        let game = Game::new(GameConfig::with_seed(seed));
        assert!(!game.is_won());
        assert!(matches!(game.history()[0].event, HistoryEvent::Dealt { seed: s } if s == seed));
    }
}
