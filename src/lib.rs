//! seahaven: Seahaven Towers solitaire engine
//!
//! Goals:
//! - Small, deterministic core: board model, move rules, win check
//! - Every move either applies fully or leaves the board untouched
//! - No panics for bad input; rejected moves come back as `Result` errors
//!
//! ## Quick start: play a move
//! ```
//! use seahaven::command::Command;
//! use seahaven::game::{Game, Outcome};
//! use seahaven::moves::MoveError;
//!
//! let mut game = Game::seeded(100);
//! assert_eq!(game.board().card_count(), 52);
//!
//! // cell 1 starts empty, so nothing can move out of it
//! let cmd: Command = "MCF 1 1".parse().unwrap();
//! assert_eq!(game.execute(cmd), Err(MoveError::EmptyCell(0)));
//!
//! let cmd: Command = "R".parse().unwrap();
//! assert_eq!(game.execute(cmd), Ok(Outcome::Restarted));
//! ```
//!
//! ## Playing
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin seahaven
//! ```
//! or the line-oriented shell with `cargo run --bin seahaven -- --plain`.

pub mod board;
pub mod cards;
pub mod command;
pub mod config;
pub mod deck;
pub mod engine;
pub mod game;
pub mod moves;
pub mod render;
pub mod shell;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
