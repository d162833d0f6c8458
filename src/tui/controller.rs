use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key(app, key.code, key.modifiers)
                {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Translate one key press into app input. Returns true when the loop
/// should stop.
pub fn handle_key(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')) {
        app.request_quit();
        return true;
    }
    if matches!(code, KeyCode::Tab) {
        let _ = app.handle_input(InputAction::ToggleMenu);
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let _ = app.handle_input(InputAction::MenuDigit(c as u8 - b'0'));
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::MenuBackspace);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.request_quit();
            }
            _ => {}
        },
        Scene::Table => {
            if matches!(code, KeyCode::Char('?')) {
                let _ = app.handle_input(InputAction::ToggleHelp);
                return false;
            }
            if app.help_open() {
                if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                    let _ = app.handle_input(InputAction::ToggleHelp);
                }
                return false;
            }
            match code {
                KeyCode::Up => {
                    let _ = app.handle_input(InputAction::HistoryUp);
                }
                KeyCode::Down => {
                    let _ = app.handle_input(InputAction::HistoryDown);
                }
                KeyCode::Enter => {
                    let _ = app.handle_input(InputAction::EntrySubmit);
                }
                KeyCode::Backspace => {
                    let _ = app.handle_input(InputAction::EntryBackspace);
                }
                KeyCode::Esc => {
                    let _ = app.handle_input(InputAction::EntryClear);
                }
                KeyCode::Char(c) => {
                    let _ = app.handle_input(InputAction::EntryChar(c));
                }
                _ => {}
            }
        }
    }
    app.should_quit()
}
