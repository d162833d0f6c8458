use crate::board::Board;
use crate::command::Command;
use crate::config::GameConfig;
use crate::moves::{Move, MoveError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryEvent {
    /// A new board was dealt from `seed`.
    Dealt { seed: u64 },
    Moved(Move),
    Rejected(Move, MoveError),
    Won,
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEvent::Dealt { seed } => write!(f, "Dealt (seed {seed})"),
            HistoryEvent::Moved(mv) => write!(f, "{mv}"),
            HistoryEvent::Rejected(mv, err) => write!(f, "{mv} rejected: {err}"),
            HistoryEvent::Won => f.write_str("Won"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    /// 1-based number of the deal the event belongs to.
    pub deal: u32,
    pub event: HistoryEvent,
}

/// What executing a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    Moved(Move),
    /// The move completed the foundation. `finished` is the winning board;
    /// `redealt` tells whether a new game has already replaced it.
    Won { finished: Box<Board>, redealt: bool },
    Restarted,
    Help,
    Quit,
}

/// One playing session: the board in play plus everything needed to deal
/// the next one.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) config: GameConfig,
    rng: ChaCha8Rng,
    deal_seed: u64,
    deal_number: u32,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// Oldest entries are dropped once the log holds this many.
    pub const HISTORY_CAP: usize = 1_000;

    /// Start a session and deal the first game. With a fixed seed the first
    /// deal uses that seed and later deals follow from it deterministically.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let deal_seed = config.seed.unwrap_or_else(|| rng.random());
        let mut game = Self {
            board: Board::deal_seeded(deal_seed),
            config,
            rng,
            deal_seed,
            deal_number: 1,
            history: Vec::new(),
        };
        game.record(HistoryEvent::Dealt { seed: deal_seed });
        game
    }

    /// Session whose first deal is `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameConfig::with_seed(seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Seed the current board was dealt from.
    pub fn deal_seed(&self) -> u64 {
        self.deal_seed
    }

    /// 1-based number of the current deal within the session.
    pub fn deal_number(&self) -> u32 {
        self.deal_number
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Throw away the current board and deal a fresh one.
    pub fn new_game(&mut self) {
        self.deal_seed = self.rng.random();
        self.deal_number += 1;
        self.board = Board::deal_seeded(self.deal_seed);
        self.record(HistoryEvent::Dealt { seed: self.deal_seed });
    }

    /// Apply a move and log it. A rejected move is logged too and leaves the
    /// board unchanged.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        match self.board.apply(mv) {
            Ok(()) => {
                self.record(HistoryEvent::Moved(mv));
                Ok(())
            }
            Err(err) => {
                self.record(HistoryEvent::Rejected(mv, err.clone()));
                Err(err)
            }
        }
    }

    /// Run one parsed command against the session.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, MoveError> {
        match command {
            Command::Move(mv) => {
                self.play(mv)?;
                if !self.board.is_won() {
                    return Ok(Outcome::Moved(mv));
                }
                self.record(HistoryEvent::Won);
                let finished = Box::new(self.board.clone());
                let redealt = self.config.auto_new_game;
                if redealt {
                    self.new_game();
                }
                Ok(Outcome::Won { finished, redealt })
            }
            Command::Restart => {
                self.new_game();
                Ok(Outcome::Restarted)
            }
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Up to `n` entries ending `offset` entries before the newest one.
    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        if n == 0 || self.history.is_empty() {
            return Vec::new();
        }
        let len = self.history.len();
        let offset = offset.min(len.saturating_sub(n));
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    fn record(&mut self, event: HistoryEvent) {
        if self.history.len() >= Self::HISTORY_CAP {
            self.history.remove(0);
        }
        self.history.push(HistoryEntry { deal: self.deal_number, event });
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    /// Everything on the foundation except the King of Spades, which waits
    /// in cell 0.
    fn one_move_from_winning() -> Board {
        let mut board = Board::empty();
        for (i, suit) in Suit::ALL.iter().enumerate() {
            let mut pile: Vec<Card> = Rank::ALL.iter().map(|&r| Card::new(r, *suit)).collect();
            if *suit == Suit::Spades {
                pile.pop();
            }
            board = board.with_pile(i, pile);
        }
        board.with_cell(0, Some(Card::new(Rank::King, Suit::Spades)))
    }

    #[test]
    fn fixed_seed_first_deal_matches_board_seed() {
        let game = Game::seeded(100);
        assert_eq!(game.deal_seed(), 100);
        assert_eq!(game.board(), &Board::deal_seeded(100));
        assert_eq!(game.deal_number(), 1);
        assert_eq!(game.history()[0].event, HistoryEvent::Dealt { seed: 100 });
    }

    #[test]
    fn fixed_seed_session_is_reproducible() {
        let mut a = Game::seeded(5);
        let mut b = Game::seeded(5);
        a.new_game();
        b.new_game();
        assert_eq!(a.deal_seed(), b.deal_seed());
        assert_eq!(a.board(), b.board());
        assert_eq!(a.deal_number(), 2);
    }

    #[test]
    fn restart_deals_a_fresh_board() {
        let mut game = Game::seeded(1);
        let first = game.board().clone();
        assert_eq!(game.execute(Command::Restart), Ok(Outcome::Restarted));
        assert_ne!(game.board(), &first);
        assert_eq!(game.board().card_count(), 52);
    }

    #[test]
    fn help_and_quit_leave_state_alone() {
        let mut game = Game::seeded(2);
        let before = game.board().clone();
        assert_eq!(game.execute(Command::Help), Ok(Outcome::Help));
        assert_eq!(game.execute(Command::Quit), Ok(Outcome::Quit));
        assert_eq!(game.board(), &before);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn rejected_move_is_logged() {
        let mut game = Game::seeded(3);
        let mv = Move::CellToTableau { cell: 0, to: 0 };
        assert_eq!(game.execute(Command::Move(mv)), Err(MoveError::EmptyCell(0)));
        let last = game.history().last().unwrap();
        assert_eq!(last.event, HistoryEvent::Rejected(mv, MoveError::EmptyCell(0)));
    }

    #[test]
    fn winning_move_redeals() {
        let mut game = Game::seeded(4);
        game.set_board(one_move_from_winning());
        let mv = Move::CellToFoundation { cell: 0, pile: 3 };
        match game.execute(Command::Move(mv)).unwrap() {
            Outcome::Won { finished, redealt } => {
                assert!(finished.is_won());
                assert!(redealt);
            }
            other => panic!("expected a win, got {other:?}"),
        }
        assert!(!game.is_won());
        assert_eq!(game.deal_number(), 2);
        assert!(game.history().iter().any(|h| h.event == HistoryEvent::Won && h.deal == 1));
    }

    #[test]
    fn winning_move_without_auto_deal_keeps_board() {
        let mut game = Game::new(GameConfig { seed: Some(4), auto_new_game: false });
        game.set_board(one_move_from_winning());
        let mv = Move::CellToFoundation { cell: 0, pile: 3 };
        let outcome = game.execute(Command::Move(mv)).unwrap();
        assert!(matches!(outcome, Outcome::Won { redealt: false, .. }));
        assert!(game.is_won());
        assert_eq!(game.deal_number(), 1);
    }

    #[test]
    fn history_paging() {
        let mut game = Game::seeded(6);
        for _ in 0..5 {
            game.new_game();
        }
        assert_eq!(game.history_len(), 6);
        let newest = game.history_recent_offset(2, 0);
        assert_eq!(newest.len(), 2);
        assert_eq!(newest[1].deal, 6);
        let older = game.history_recent_offset(2, 2);
        assert_eq!(older[1].deal, 4);
        let clamped = game.history_recent_offset(4, 100);
        assert_eq!(clamped[0].deal, 1);
        assert!(game.history_recent_offset(0, 0).is_empty());
    }

    #[test]
    fn history_is_capped() {
        let mut game = Game::seeded(8);
        for _ in 0..Game::HISTORY_CAP + 5 {
            game.new_game();
        }
        assert_eq!(game.history_len(), Game::HISTORY_CAP);
        assert_eq!(game.history()[0].deal, 7);
        let newest = game.history().last().unwrap();
        assert_eq!(newest.deal, game.deal_number());
    }
}
