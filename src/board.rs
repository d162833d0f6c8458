//! Game state: the tableau, the foundation and the cells.
//!
//! A [`Board`] is dealt once per game and then changed only through the move
//! engine in [`crate::moves`]. Every card of the deck lives in exactly one
//! place on the board at all times.

use crate::cards::Card;
use crate::deck::{Deck, DECK_SIZE};

pub const NUM_COLUMNS: usize = 10;
pub const NUM_PILES: usize = 4;
pub const NUM_CELLS: usize = 4;

/// Cards each tableau column receives in the deal.
pub const DEAL_DEPTH: usize = 5;
/// Cells that receive the two cards left after the tableau deal.
pub const DEALT_CELLS: [usize; 2] = [1, 2];

/// Cards in a finished foundation pile.
pub const PILE_SIZE: usize = 13;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub(crate) tableau: [Vec<Card>; NUM_COLUMNS],
    pub(crate) foundation: [Vec<Card>; NUM_PILES],
    pub(crate) cells: [Option<Card>; NUM_CELLS],
}

impl Board {
    /// A board with no cards on it. Used to arrange positions by hand.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal a new game from `deck`: five round-robin passes over the ten
    /// columns, then one card into cell 1 and one into cell 2.
    pub fn deal(deck: &mut Deck) -> Self {
        let mut board = Self::empty();
        for _ in 0..DEAL_DEPTH {
            for column in board.tableau.iter_mut() {
                if let Some(card) = deck.deal() {
                    column.push(card);
                }
            }
        }
        for idx in DEALT_CELLS {
            board.cells[idx] = deck.deal();
        }
        board
    }

    /// Deal from a fresh deck shuffled with `seed`.
    ///
    /// ```
    /// use seahaven::board::Board;
    ///
    /// let board = Board::deal_seeded(100);
    /// assert_eq!(board.card_count(), 52);
    /// assert!(board.column(0).is_some_and(|c| c.len() == 5));
    /// ```
    pub fn deal_seeded(seed: u64) -> Self {
        Self::deal(&mut Deck::shuffled(seed))
    }

    /// Replace a tableau column. Out-of-range columns are ignored.
    pub fn with_column(mut self, col: usize, cards: Vec<Card>) -> Self {
        if let Some(slot) = self.tableau.get_mut(col) {
            *slot = cards;
        }
        self
    }

    /// Replace a foundation pile. The pile is taken as given; the foundation
    /// rule is only enforced by moves.
    pub fn with_pile(mut self, pile: usize, cards: Vec<Card>) -> Self {
        if let Some(slot) = self.foundation.get_mut(pile) {
            *slot = cards;
        }
        self
    }

    pub fn with_cell(mut self, cell: usize, card: Option<Card>) -> Self {
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = card;
        }
        self
    }

    pub fn column(&self, col: usize) -> Option<&[Card]> {
        self.tableau.get(col).map(Vec::as_slice)
    }

    pub fn columns(&self) -> &[Vec<Card>; NUM_COLUMNS] {
        &self.tableau
    }

    pub fn pile(&self, pile: usize) -> Option<&[Card]> {
        self.foundation.get(pile).map(Vec::as_slice)
    }

    pub fn piles(&self) -> &[Vec<Card>; NUM_PILES] {
        &self.foundation
    }

    /// Card held in `cell`, `None` when empty or out of range.
    pub fn cell(&self, cell: usize) -> Option<Card> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Card>; NUM_CELLS] {
        &self.cells
    }

    /// Top card of a tableau column.
    pub fn column_top(&self, col: usize) -> Option<Card> {
        self.tableau.get(col).and_then(|c| c.last().copied())
    }

    /// Top card of a foundation pile.
    pub fn pile_top(&self, pile: usize) -> Option<Card> {
        self.foundation.get(pile).and_then(|p| p.last().copied())
    }

    /// Depth of the deepest tableau column.
    pub fn max_column_len(&self) -> usize {
        self.tableau.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn foundation_len(&self) -> usize {
        self.foundation.iter().map(Vec::len).sum()
    }

    /// Cards across tableau, foundation and cells. 52 for any dealt board.
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(Vec::len).sum::<usize>()
            + self.foundation_len()
            + self.cells.iter().flatten().count()
    }

    /// Every card on the board, in tableau, foundation, cell order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.tableau
            .iter()
            .flatten()
            .chain(self.foundation.iter().flatten())
            .chain(self.cells.iter().flatten())
            .copied()
    }

    /// True when every foundation pile holds a full suit.
    pub fn is_won(&self) -> bool {
        self.foundation.iter().all(|pile| pile.len() == PILE_SIZE)
    }

    /// Checks the layout invariants: a full deck with no duplicates, and
    /// every foundation pile an Ace-up run of a single suit.
    pub fn is_consistent(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(DECK_SIZE);
        if !self.cards().all(|c| seen.insert(c)) || seen.len() != DECK_SIZE {
            return false;
        }
        self.foundation.iter().all(|pile| {
            pile.first().map_or(true, |c| c.is_ace())
                && pile.windows(2).all(|w| w[1].follows(w[0]))
        })
    }
}
