//! Move engine: the five move kinds, their validation and their application.
//!
//! Every operation is total. Bad indices, empty sources and rule violations
//! come back as a [`MoveError`] and leave the board exactly as it was.

use crate::board::{Board, NUM_CELLS, NUM_COLUMNS, NUM_PILES};
use crate::cards::Card;
use std::fmt;

/// One move between board locations. Indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Move {
    /// Top of tableau column `from` onto column `to`.
    TableauToTableau { from: usize, to: usize },
    /// Top of tableau column `from` into cell `cell`.
    TableauToCell { from: usize, cell: usize },
    /// Card in `cell` onto tableau column `to`.
    CellToTableau { cell: usize, to: usize },
    /// Top of tableau column `from` onto foundation pile `pile`.
    TableauToFoundation { from: usize, pile: usize },
    /// Card in `cell` onto foundation pile `pile`.
    CellToFoundation { cell: usize, pile: usize },
}

impl Move {
    /// The command verb for this move kind.
    pub fn verb(self) -> &'static str {
        match self {
            Move::TableauToTableau { .. } => "MTT",
            Move::TableauToCell { .. } => "MTC",
            Move::CellToTableau { .. } => "MCT",
            Move::TableauToFoundation { .. } => "MTF",
            Move::CellToFoundation { .. } => "MCF",
        }
    }

    /// Source and destination as 0-based indices.
    pub fn indices(self) -> (usize, usize) {
        match self {
            Move::TableauToTableau { from, to } => (from, to),
            Move::TableauToCell { from, cell } => (from, cell),
            Move::CellToTableau { cell, to } => (cell, to),
            Move::TableauToFoundation { from, pile } => (from, pile),
            Move::CellToFoundation { cell, pile } => (cell, pile),
        }
    }
}

/// Prints the move the way it is typed: verb plus 1-based indices.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (src, dst) = self.indices();
        write!(f, "{} {} {}", self.verb(), src + 1, dst + 1)
    }
}

/// Why a move was rejected. Indices in the messages are 1-based.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("no tableau column {}", .0 + 1)]
    ColumnOutOfRange(usize),
    #[error("no cell {}", .0 + 1)]
    CellOutOfRange(usize),
    #[error("no foundation pile {}", .0 + 1)]
    PileOutOfRange(usize),
    #[error("tableau column {} is empty", .0 + 1)]
    EmptyColumn(usize),
    #[error("cell {} is empty", .0 + 1)]
    EmptyCell(usize),
    #[error("cell {} is already occupied", .0 + 1)]
    CellOccupied(usize),
    #[error("only a King may start an empty column, got {card}")]
    KingOnlyOnEmptyColumn { card: Card },
    #[error("{card} does not stack on {onto}")]
    DoesNotStack { card: Card, onto: Card },
    #[error("only an Ace may start a foundation pile, got {card}")]
    AceOnlyOnEmptyPile { card: Card },
    #[error("{card} does not follow {onto} on the foundation")]
    DoesNotFollow { card: Card, onto: Card },
}

fn check_column(col: usize) -> Result<(), MoveError> {
    if col < NUM_COLUMNS {
        Ok(())
    } else {
        Err(MoveError::ColumnOutOfRange(col))
    }
}

fn check_cell(cell: usize) -> Result<(), MoveError> {
    if cell < NUM_CELLS {
        Ok(())
    } else {
        Err(MoveError::CellOutOfRange(cell))
    }
}

fn check_pile(pile: usize) -> Result<(), MoveError> {
    if pile < NUM_PILES {
        Ok(())
    } else {
        Err(MoveError::PileOutOfRange(pile))
    }
}

impl Board {
    fn source_column(&self, col: usize) -> Result<Card, MoveError> {
        check_column(col)?;
        self.column_top(col).ok_or(MoveError::EmptyColumn(col))
    }

    fn source_cell(&self, cell: usize) -> Result<Card, MoveError> {
        check_cell(cell)?;
        self.cell(cell).ok_or(MoveError::EmptyCell(cell))
    }

    /// Stacking rule: a King onto an empty column, otherwise same suit and
    /// one rank below the column's top card.
    fn check_stack(&self, card: Card, col: usize) -> Result<(), MoveError> {
        check_column(col)?;
        match self.column_top(col) {
            None if card.is_king() => Ok(()),
            None => Err(MoveError::KingOnlyOnEmptyColumn { card }),
            Some(onto) if card.stacks_on(onto) => Ok(()),
            Some(onto) => Err(MoveError::DoesNotStack { card, onto }),
        }
    }

    /// Foundation rule: an Ace onto an empty pile, otherwise same suit and
    /// one rank above the pile's top card.
    fn check_found(&self, card: Card, pile: usize) -> Result<(), MoveError> {
        check_pile(pile)?;
        match self.pile_top(pile) {
            None if card.is_ace() => Ok(()),
            None => Err(MoveError::AceOnlyOnEmptyPile { card }),
            Some(onto) if card.follows(onto) => Ok(()),
            Some(onto) => Err(MoveError::DoesNotFollow { card, onto }),
        }
    }

    /// Check a move against the current layout without changing anything.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::TableauToTableau { from, to } => {
                let card = self.source_column(from)?;
                self.check_stack(card, to)
            }
            Move::TableauToCell { from, cell } => {
                self.source_column(from)?;
                check_cell(cell)?;
                match self.cells[cell] {
                    None => Ok(()),
                    Some(_) => Err(MoveError::CellOccupied(cell)),
                }
            }
            Move::CellToTableau { cell, to } => {
                let card = self.source_cell(cell)?;
                self.check_stack(card, to)
            }
            Move::TableauToFoundation { from, pile } => {
                let card = self.source_column(from)?;
                self.check_found(card, pile)
            }
            Move::CellToFoundation { cell, pile } => {
                let card = self.source_cell(cell)?;
                self.check_found(card, pile)
            }
        }
    }

    /// Validate and perform a move in one call. On error the board is
    /// untouched.
    ///
    /// ```
    /// use seahaven::board::Board;
    /// use seahaven::cards::{Card, Rank, Suit};
    /// use seahaven::moves::{Move, MoveError};
    ///
    /// let two = Card::new(Rank::Two, Suit::Hearts);
    /// let mut board = Board::empty().with_column(0, vec![two]);
    /// let err = board.apply(Move::TableauToFoundation { from: 0, pile: 0 }).unwrap_err();
    /// assert_eq!(err, MoveError::AceOnlyOnEmptyPile { card: two });
    /// assert_eq!(board.column_top(0), Some(two));
    /// ```
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        self.validate(mv)?;
        let card = match mv {
            Move::TableauToTableau { from, .. }
            | Move::TableauToCell { from, .. }
            | Move::TableauToFoundation { from, .. } => {
                self.tableau[from].pop().ok_or(MoveError::EmptyColumn(from))?
            }
            Move::CellToTableau { cell, .. } | Move::CellToFoundation { cell, .. } => {
                self.cells[cell].take().ok_or(MoveError::EmptyCell(cell))?
            }
        };
        match mv {
            Move::TableauToTableau { to, .. } | Move::CellToTableau { to, .. } => {
                self.tableau[to].push(card)
            }
            Move::TableauToCell { cell, .. } => self.cells[cell] = Some(card),
            Move::TableauToFoundation { pile, .. } | Move::CellToFoundation { pile, .. } => {
                self.foundation[pile].push(card)
            }
        }
        Ok(())
    }

    pub fn move_within_tableau(&mut self, from: usize, to: usize) -> Result<(), MoveError> {
        self.apply(Move::TableauToTableau { from, to })
    }

    pub fn move_tableau_to_cell(&mut self, from: usize, cell: usize) -> Result<(), MoveError> {
        self.apply(Move::TableauToCell { from, cell })
    }

    pub fn move_cell_to_tableau(&mut self, cell: usize, to: usize) -> Result<(), MoveError> {
        self.apply(Move::CellToTableau { cell, to })
    }

    pub fn move_tableau_to_foundation(
        &mut self,
        from: usize,
        pile: usize,
    ) -> Result<(), MoveError> {
        self.apply(Move::TableauToFoundation { from, pile })
    }

    pub fn move_cell_to_foundation(&mut self, cell: usize, pile: usize) -> Result<(), MoveError> {
        self.apply(Move::CellToFoundation { cell, pile })
    }

    /// Every move that is legal right now, in verb order then by index.
    pub fn legal_moves(&self) -> Vec<Move> {
        all_moves().filter(|&mv| self.validate(mv).is_ok()).collect()
    }
}

/// Every in-range move, legal or not.
pub fn all_moves() -> impl Iterator<Item = Move> {
    let tt = (0..NUM_COLUMNS).flat_map(|from| {
        (0..NUM_COLUMNS)
            .filter(move |&to| to != from)
            .map(move |to| Move::TableauToTableau { from, to })
    });
    let tc = (0..NUM_COLUMNS)
        .flat_map(|from| (0..NUM_CELLS).map(move |cell| Move::TableauToCell { from, cell }));
    let ct = (0..NUM_CELLS)
        .flat_map(|cell| (0..NUM_COLUMNS).map(move |to| Move::CellToTableau { cell, to }));
    let tf = (0..NUM_COLUMNS)
        .flat_map(|from| (0..NUM_PILES).map(move |pile| Move::TableauToFoundation { from, pile }));
    let cf = (0..NUM_CELLS)
        .flat_map(|cell| (0..NUM_PILES).map(move |pile| Move::CellToFoundation { cell, pile }));
    tt.chain(tc).chain(ct).chain(tf).chain(cf)
}
