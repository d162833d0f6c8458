use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use seahaven::config::{Options, USAGE};
use seahaven::game::Game;
use seahaven::shell;
use seahaven::tui::{app::AppState, controller};
use std::io::{self, IsTerminal, Stdout};
use std::process::ExitCode;
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(opts: &Options) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(opts.config);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    if res.is_ok() {
        println!("Thank you for playing.");
    }
    res
}

fn main() -> ExitCode {
    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("seahaven: {err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if opts.show_usage {
        println!("seahaven {}\n{USAGE}", seahaven::VERSION);
        return ExitCode::SUCCESS;
    }

    let res = if opts.plain || !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        let mut game = Game::new(opts.config);
        shell::run(&mut game, io::stdin().lock(), io::stdout().lock())
    } else {
        run_tui(&opts)
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("seahaven: {err}");
            ExitCode::FAILURE
        }
    }
}
