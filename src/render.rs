//! Plain-text rendering of a board for the line-oriented shell.
//!
//! Layout, top to bottom:
//!   - a header naming the foundation and cell areas,
//!   - the top cards of foundation piles 1-2, the four cells, then the top
//!     cards of piles 3-4 (`[  ]` marks an empty slot),
//!   - the tableau, one numbered row per card depth, ten columns wide.

use crate::board::{Board, NUM_COLUMNS};
use crate::cards::Card;
use std::fmt::{self, Write};

const EMPTY_SLOT: &str = "[  ]";

fn slot(card: Option<Card>) -> String {
    match card {
        Some(c) => format!("{c:^4}"),
        None => EMPTY_SLOT.to_string(),
    }
}

/// Render the board as multi-line text.
///
/// ```
/// use seahaven::board::Board;
/// use seahaven::render::board_text;
///
/// let text = board_text(&Board::deal_seeded(100));
/// assert!(text.contains("tableau"));
/// assert_eq!(text.lines().filter(|l| l.starts_with(" 5 ")).count(), 1);
/// ```
pub fn board_text(board: &Board) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_board(&mut out, board);
    out
}

fn write_board(out: &mut String, board: &Board) -> fmt::Result {
    writeln!(out, "{:<12}{:^20}{:>12}", "foundation", "cell", "foundation")?;
    writeln!(out, "{:>4} {:>4}   {:>4} {:>4} {:>4} {:>4}   {:>4} {:>4}", 1, 2, 1, 2, 3, 4, 3, 4)?;
    writeln!(
        out,
        "{} {}   {} {} {} {}   {} {}",
        slot(board.pile_top(0)),
        slot(board.pile_top(1)),
        slot(board.cell(0)),
        slot(board.cell(1)),
        slot(board.cell(2)),
        slot(board.cell(3)),
        slot(board.pile_top(2)),
        slot(board.pile_top(3)),
    )?;

    writeln!(out)?;
    writeln!(out, "tableau")?;
    write!(out, "   ")?;
    for col in 1..=NUM_COLUMNS {
        write!(out, " {col:>3}")?;
    }
    writeln!(out)?;
    for row in 0..board.max_column_len() {
        write!(out, "{:>2} ", row + 1)?;
        for column in board.columns() {
            match column.get(row) {
                Some(card) => write!(out, " {card:>3}")?,
                None => write!(out, "    ")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&board_text(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn empty_slots_are_bracketed() {
        let text = board_text(&Board::empty());
        let top_row = text.lines().nth(2).unwrap();
        assert_eq!(top_row.matches(EMPTY_SLOT).count(), 8);
        // no tableau rows for an empty board
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn shows_top_cards_and_columns() {
        let board = Board::empty()
            .with_pile(2, vec![Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Two, Suit::Hearts)])
            .with_cell(1, Some(Card::new(Rank::Nine, Suit::Clubs)))
            .with_column(
                9,
                vec![Card::new(Rank::King, Suit::Spades), Card::new(Rank::Queen, Suit::Spades)],
            );
        let text = board_text(&board);
        let top_row = text.lines().nth(2).unwrap();
        assert!(top_row.contains("2h"));
        assert!(!top_row.contains("Ah"));
        assert!(top_row.contains("9c"));
        let rows: Vec<&str> = text.lines().skip(6).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with(" 1 ") && rows[0].ends_with("Ks"));
        assert!(rows[1].starts_with(" 2 ") && rows[1].ends_with("Qs"));
    }

    #[test]
    fn dealt_board_has_five_rows() {
        let text = Board::deal_seeded(100).to_string();
        assert_eq!(text.lines().count(), 6 + 5);
    }
}
