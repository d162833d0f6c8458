// Game engine API boundary. The shells (plain text and TUI) drive the game
// through this trait: deal, the five moves, and the win check. Indices are
// 0-based and already range-normalized by the command parser.

use crate::board::Board;
use crate::moves::{Move, MoveError};

pub trait SolitaireEngine {
    // Lifecycle
    fn new_game(&mut self);

    // Moves
    fn move_within_tableau(&mut self, from: usize, to: usize) -> Result<(), MoveError>;
    fn move_tableau_to_cell(&mut self, from: usize, cell: usize) -> Result<(), MoveError>;
    fn move_cell_to_tableau(&mut self, cell: usize, to: usize) -> Result<(), MoveError>;
    fn move_tableau_to_foundation(&mut self, from: usize, pile: usize) -> Result<(), MoveError>;
    fn move_cell_to_foundation(&mut self, cell: usize, pile: usize) -> Result<(), MoveError>;

    // Queries
    fn is_won(&self) -> bool;
    fn board(&self) -> &Board;
}

impl SolitaireEngine for crate::game::Game {
    fn new_game(&mut self) {
        self.new_game();
    }

    fn move_within_tableau(&mut self, from: usize, to: usize) -> Result<(), MoveError> {
        self.play(Move::TableauToTableau { from, to })
    }
    fn move_tableau_to_cell(&mut self, from: usize, cell: usize) -> Result<(), MoveError> {
        self.play(Move::TableauToCell { from, cell })
    }
    fn move_cell_to_tableau(&mut self, cell: usize, to: usize) -> Result<(), MoveError> {
        self.play(Move::CellToTableau { cell, to })
    }
    fn move_tableau_to_foundation(&mut self, from: usize, pile: usize) -> Result<(), MoveError> {
        self.play(Move::TableauToFoundation { from, pile })
    }
    fn move_cell_to_foundation(&mut self, cell: usize, pile: usize) -> Result<(), MoveError> {
        self.play(Move::CellToFoundation { cell, pile })
    }

    fn is_won(&self) -> bool {
        self.is_won()
    }
    fn board(&self) -> &Board {
        self.board()
    }
}

impl SolitaireEngine for Board {
    fn new_game(&mut self) {
        *self = Board::deal(&mut crate::deck::Deck::shuffled(rand::random()));
    }

    fn move_within_tableau(&mut self, from: usize, to: usize) -> Result<(), MoveError> {
        Board::move_within_tableau(self, from, to)
    }
    fn move_tableau_to_cell(&mut self, from: usize, cell: usize) -> Result<(), MoveError> {
        Board::move_tableau_to_cell(self, from, cell)
    }
    fn move_cell_to_tableau(&mut self, cell: usize, to: usize) -> Result<(), MoveError> {
        Board::move_cell_to_tableau(self, cell, to)
    }
    fn move_tableau_to_foundation(&mut self, from: usize, pile: usize) -> Result<(), MoveError> {
        Board::move_tableau_to_foundation(self, from, pile)
    }
    fn move_cell_to_foundation(&mut self, cell: usize, pile: usize) -> Result<(), MoveError> {
        Board::move_cell_to_foundation(self, cell, pile)
    }

    fn is_won(&self) -> bool {
        Board::is_won(self)
    }
    fn board(&self) -> &Board {
        self
    }
}
