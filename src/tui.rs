//! Interactive terminal front end built on ratatui + crossterm.

pub mod app;
pub mod controller;
mod ui;
