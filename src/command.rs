//! Text commands typed at the prompt.
//!
//! Parsing turns user text into a [`Command`] with 0-based, range-checked
//! indices. Malformed input stops here and never reaches the move engine.

use crate::board::{NUM_CELLS, NUM_COLUMNS, NUM_PILES};
use crate::moves::Move;
use std::fmt;
use std::str::FromStr;

/// The menu shown at start-up and on `H`.
pub const MENU: &str = "
Input options:
    MTT s d: Move card from end of Tableau column s to end of column d.
    MTC s d: Move card from end of Tableau column s to Cells d.
    MCT s d: Move card from Cells s to end of Tableau column d.
    MTF s d: Move card from end of Tableau column s to Foundation d.
    MCF s d: Move card from Cells s to Foundation d.
    R: Restart the game (after shuffling)
    H: Display this menu of choices
    Q: Quit the game
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    Move(Move),
    Restart,
    Help,
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(mv) => write!(f, "{mv}"),
            Command::Restart => f.write_str("R"),
            Command::Help => f.write_str("H"),
            Command::Quit => f.write_str("Q"),
        }
    }
}

/// Which kind of board location an index names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Column,
    Cell,
    Pile,
}

impl Location {
    pub const fn count(self) -> usize {
        match self {
            Location::Column => NUM_COLUMNS,
            Location::Cell => NUM_CELLS,
            Location::Pile => NUM_PILES,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Location::Column => "tableau column",
            Location::Cell => "cell",
            Location::Pile => "foundation",
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownVerb(String),
    #[error("{verb} takes {expected} argument(s), got {got}")]
    WrongArity { verb: String, expected: usize, got: usize },
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{location} must be between 1 and {}, got {got}", .location.count())]
    OutOfRange { location: Location, got: usize },
}

fn parse_index(token: &str, location: Location) -> Result<usize, CommandError> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(CommandError::NotANumber(token.to_string()));
    }
    // digit strings too long for usize are out of range, not malformed
    let got = token.parse::<usize>().unwrap_or(usize::MAX);
    if got == 0 || got > location.count() {
        return Err(CommandError::OutOfRange { location, got });
    }
    Ok(got - 1)
}

impl FromStr for Command {
    type Err = CommandError;

    /// ```
    /// use seahaven::command::Command;
    /// use seahaven::moves::Move;
    ///
    /// let cmd: Command = "MTT 3 7".parse().unwrap();
    /// assert_eq!(cmd, Command::Move(Move::TableauToTableau { from: 2, to: 6 }));
    /// assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let Some((&head, args)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };
        let verb = head.to_ascii_uppercase();

        // R/H/Q go by their first letter so "restart" and "quit" work too
        let single = match verb.chars().next() {
            Some('R') => Some(Command::Restart),
            Some('H') => Some(Command::Help),
            Some('Q') => Some(Command::Quit),
            _ => None,
        };
        if let Some(cmd) = single {
            if !args.is_empty() {
                return Err(CommandError::WrongArity { verb, expected: 0, got: args.len() });
            }
            return Ok(cmd);
        }

        let (src, dst) = match verb.as_str() {
            "MTT" => (Location::Column, Location::Column),
            "MTC" => (Location::Column, Location::Cell),
            "MCT" => (Location::Cell, Location::Column),
            "MTF" => (Location::Column, Location::Pile),
            "MCF" => (Location::Cell, Location::Pile),
            _ => return Err(CommandError::UnknownVerb(head.to_string())),
        };
        let [a, b] = args else {
            return Err(CommandError::WrongArity { verb, expected: 2, got: args.len() });
        };
        let a = parse_index(a, src)?;
        let b = parse_index(b, dst)?;
        let mv = match verb.as_str() {
            "MTT" => Move::TableauToTableau { from: a, to: b },
            "MTC" => Move::TableauToCell { from: a, cell: b },
            "MCT" => Move::CellToTableau { cell: a, to: b },
            "MTF" => Move::TableauToFoundation { from: a, pile: b },
            _ => Move::CellToFoundation { cell: a, pile: b },
        };
        Ok(Command::Move(mv))
    }
}
