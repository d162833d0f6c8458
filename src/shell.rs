//! Line-oriented shell: read a command, run it, print the result.
//!
//! Works over any reader/writer pair so whole sessions can be scripted.

use crate::command::{Command, MENU};
use crate::game::{Game, Outcome};
use crate::render::board_text;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Input an option (MTT,MTC,MCT,MTF,MCF,R,H,Q): ";

/// Drive `game` from `input` until `Q` or end of input.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "\nWelcome to Seahaven Solitaire.\n")?;
    show(&mut out, game)?;
    writeln!(out, "{MENU}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "\n{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                writeln!(out, "Error in option: {} ({err})", line.trim())?;
                continue;
            }
        };
        match game.execute(command) {
            Ok(Outcome::Moved(_)) => show(&mut out, game)?,
            Ok(Outcome::Won { finished, redealt }) => {
                writeln!(out, "You won!")?;
                writeln!(out, "\n{}", board_text(&finished))?;
                if redealt {
                    writeln!(out, "\n- - - - New Game. - - - -")?;
                    show(&mut out, game)?;
                    writeln!(out, "{MENU}")?;
                }
            }
            Ok(Outcome::Restarted) => show(&mut out, game)?,
            Ok(Outcome::Help) => writeln!(out, "{MENU}")?,
            Ok(Outcome::Quit) => break,
            Err(err) => {
                writeln!(out, "Error in move: {command} ({err})")?;
                writeln!(out, "{MENU}")?;
            }
        }
    }
    writeln!(out, "Thank you for playing.")?;
    out.flush()
}

fn show<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "\nDeal #{} (seed {})", game.deal_number(), game.deal_seed())?;
    write!(out, "{}", board_text(game.board()))
}
