use crate::command::Command;
use crate::config::GameConfig;
use crate::game::{Game, Outcome};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    EntryChar(char),
    EntryBackspace,
    EntryClear,
    EntrySubmit,
    ToggleMenu,
    ToggleHelp,
    HistoryUp,
    HistoryDown,
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuDigit(u8),
    MenuBackspace,
    MenuApply,
    MenuCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    at: Instant,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_fixed_seed: bool,
    pub cfg_seed: u64,
    pub cfg_auto_new_game: bool,
    entry: String,
    help_open: bool,
    history_offset: usize,
    log_page: usize,
    message: Option<StatusMessage>,
    quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const MESSAGE_TTL: Duration = Duration::from_secs(3);
    const ENTRY_MAX: usize = 24;

    pub fn new(config: GameConfig) -> Self {
        let game = Game::new(config);
        Self {
            scene: Scene::Table,
            menu_index: 0,
            cfg_fixed_seed: config.seed.is_some(),
            cfg_seed: game.deal_seed(),
            cfg_auto_new_game: config.auto_new_game,
            game,
            entry: String::new(),
            help_open: false,
            history_offset: 0,
            log_page: Self::HISTORY_PAGE_SIZE,
            message: None,
            quit: false,
        }
    }

    pub fn entry_text(&self) -> &str {
        &self.entry
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    /// Log rows visible on the last draw.
    pub fn log_page(&self) -> usize {
        self.log_page
    }

    /// Record how many log rows the panel can show. Scrolling stops once the
    /// oldest entry is on screen.
    pub fn set_log_page(&mut self, rows: usize) {
        self.log_page = rows.clamp(1, Self::HISTORY_PAGE_SIZE);
        self.history_offset = self.history_offset.min(self.max_history_offset());
    }

    fn max_history_offset(&self) -> usize {
        self.game.history_len().saturating_sub(self.log_page)
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    fn set_message(&mut self, kind: MessageKind, text: String) {
        self.message = Some(StatusMessage { kind, text, at: Instant::now() });
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn submit_entry(&mut self) -> bool {
        let text = self.entry.trim().to_string();
        if text.is_empty() {
            return false;
        }
        let command = match text.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                // keep the text so it can be corrected
                self.set_message(MessageKind::Error, format!("Error in option: {text} ({err})"));
                return false;
            }
        };
        self.entry.clear();
        match self.game.execute(command) {
            Ok(Outcome::Moved(mv)) => {
                self.history_offset = 0;
                self.set_message(MessageKind::Info, format!("Moved: {mv}"));
            }
            Ok(Outcome::Won { redealt, .. }) => {
                self.history_offset = 0;
                let text = if redealt {
                    "You won! - - - - New Game. - - - -".to_string()
                } else {
                    "You won! Enter R for a new game.".to_string()
                };
                self.set_message(MessageKind::Info, text);
            }
            Ok(Outcome::Restarted) => {
                self.history_offset = 0;
                let text = format!("New game dealt (seed {})", self.game.deal_seed());
                self.set_message(MessageKind::Info, text);
            }
            Ok(Outcome::Help) => {
                self.help_open = true;
            }
            Ok(Outcome::Quit) => {
                self.quit = true;
            }
            Err(err) => {
                self.set_message(MessageKind::Error, format!("Error in move: {command} ({err})"));
                return false;
            }
        }
        true
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::EntryChar(c) => {
                if self.scene == Scene::Table
                    && (c.is_ascii_alphanumeric() || c == ' ')
                    && self.entry.len() < Self::ENTRY_MAX
                {
                    self.entry.push(c);
                }
                false
            }
            InputAction::EntryBackspace => {
                self.entry.pop();
                false
            }
            InputAction::EntryClear => {
                self.entry.clear();
                self.clear_message();
                false
            }
            InputAction::EntrySubmit => self.scene == Scene::Table && self.submit_entry(),
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table {
                    let max_offset = self.max_history_offset();
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuDigit(d) => {
                if self.scene == Scene::Menu {
                    self.menu_digit(d);
                }
                false
            }
            InputAction::MenuBackspace => {
                if self.scene == Scene::Menu {
                    self.menu_backspace();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
        }
    }

    /// Called on every controller tick; expires the status message.
    pub fn on_tick(&mut self) {
        if let Some(msg) = &self.message {
            if msg.at.elapsed() >= Self::MESSAGE_TTL {
                self.clear_message();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(app: &mut AppState, text: &str) -> bool {
        for c in text.chars() {
            let _ = app.handle_input(InputAction::EntryChar(c));
        }
        app.handle_input(InputAction::EntrySubmit)
    }

    #[test]
    fn entry_filters_characters() {
        let mut app = AppState::new(GameConfig::with_seed(1));
        for c in "m#t;t".chars() {
            let _ = app.handle_input(InputAction::EntryChar(c));
        }
        assert_eq!(app.entry_text(), "mtt");
        let _ = app.handle_input(InputAction::EntryBackspace);
        assert_eq!(app.entry_text(), "mt");
    }

    #[test]
    fn bad_option_keeps_entry_and_reports() {
        let mut app = AppState::new(GameConfig::with_seed(1));
        assert!(!type_line(&mut app, "MTT 1"));
        assert_eq!(app.entry_text(), "MTT 1");
        let msg = app.message().unwrap();
        assert_eq!(msg.kind, MessageKind::Error);
        assert!(msg.text.starts_with("Error in option"));
    }

    #[test]
    fn rejected_move_reports_and_clears_entry() {
        let mut app = AppState::new(GameConfig::with_seed(1));
        let before = app.game.board().clone();
        assert!(!type_line(&mut app, "MCT 1 1"));
        assert_eq!(app.entry_text(), "");
        assert_eq!(app.message().unwrap().kind, MessageKind::Error);
        assert_eq!(app.game.board(), &before);
    }

    #[test]
    fn help_and_quit_commands() {
        let mut app = AppState::new(GameConfig::with_seed(1));
        assert!(type_line(&mut app, "h"));
        assert!(app.help_open());
        assert!(!app.should_quit());
        assert!(type_line(&mut app, "q"));
        assert!(app.should_quit());
    }

    #[test]
    fn message_expires_after_ttl() {
        let mut app = AppState::new(GameConfig::with_seed(1));
        app.set_message(MessageKind::Info, "hi".into());
        app.on_tick();
        assert!(app.message().is_some());
        let past = Instant::now().checked_sub(AppState::MESSAGE_TTL).unwrap();
        if let Some(msg) = app.message.as_mut() {
            msg.at = past;
        }
        app.on_tick();
        assert!(app.message().is_none());
    }
}
