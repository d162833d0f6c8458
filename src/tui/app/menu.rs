use super::AppState;
use crate::config::GameConfig;

/// Entries of the settings menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    SeedMode,
    Seed,
    AutoNewGame,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::SeedMode, MenuItem::Seed, MenuItem::AutoNewGame];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::SeedMode => {
                let mode = if app.cfg_fixed_seed { "Fixed" } else { "Random" };
                format!("Seed mode: {mode}")
            }
            MenuItem::Seed => {
                if app.cfg_fixed_seed {
                    format!("Seed: {}", app.cfg_seed)
                } else {
                    "Seed: (random)".to_string()
                }
            }
            MenuItem::AutoNewGame => {
                let v = if app.cfg_auto_new_game { "On" } else { "Off" };
                format!("New game after a win: {v}")
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::SeedMode => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_add(1),
            MenuItem::AutoNewGame => app.cfg_auto_new_game = !app.cfg_auto_new_game,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::SeedMode => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_sub(1),
            MenuItem::AutoNewGame => app.cfg_auto_new_game = !app.cfg_auto_new_game,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MENU_ITEMS[self.menu_index % MENU_ITEMS.len()]
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        let config = self.game.config();
        self.cfg_fixed_seed = config.seed.is_some();
        self.cfg_seed = config.seed.unwrap_or_else(|| self.game.deal_seed());
        self.cfg_auto_new_game = config.auto_new_game;
        self.scene = super::Scene::Menu;
    }

    /// Start a new session with the edited settings.
    pub fn apply_menu(&mut self) {
        let config = GameConfig {
            seed: self.cfg_fixed_seed.then_some(self.cfg_seed),
            auto_new_game: self.cfg_auto_new_game,
        };
        let fresh = AppState::new(config);
        let menu_index = self.menu_index;
        *self = fresh;
        self.menu_index = menu_index;
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        self.selected_menu_item().inc(self);
    }
    pub fn menu_dec(&mut self) {
        self.selected_menu_item().dec(self);
    }

    /// Type a digit into the seed. Switches the seed mode to fixed.
    pub fn menu_digit(&mut self, digit: u8) {
        if self.selected_menu_item() != MenuItem::Seed || digit > 9 {
            return;
        }
        let seed = if self.cfg_fixed_seed { self.cfg_seed } else { 0 };
        self.cfg_fixed_seed = true;
        self.cfg_seed = seed.saturating_mul(10).saturating_add(u64::from(digit));
    }

    pub fn menu_backspace(&mut self) {
        if self.selected_menu_item() == MenuItem::Seed && self.cfg_fixed_seed {
            self.cfg_seed /= 10;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{InputAction, Scene};

    #[test]
    fn typing_a_seed_fixes_it() {
        let mut app = AppState::default();
        let _ = app.handle_input(InputAction::ToggleMenu);
        assert_eq!(app.scene, Scene::Menu);
        let _ = app.handle_input(InputAction::MenuNext);
        assert_eq!(app.selected_menu_item(), MenuItem::Seed);
        for d in [1, 0, 0] {
            let _ = app.handle_input(InputAction::MenuDigit(d));
        }
        assert!(app.cfg_fixed_seed);
        assert_eq!(app.cfg_seed, 100);
        let _ = app.handle_input(InputAction::MenuBackspace);
        assert_eq!(app.cfg_seed, 10);
        let _ = app.handle_input(InputAction::MenuApply);
        assert_eq!(app.scene, Scene::Table);
        assert_eq!(app.game.deal_seed(), 10);
        assert_eq!(app.game.config().seed, Some(10));
    }

    #[test]
    fn cancel_keeps_session() {
        let mut app = AppState::new(GameConfig::with_seed(9));
        let board = app.game.board().clone();
        app.open_menu();
        app.menu_index = 2;
        app.menu_inc();
        assert!(!app.cfg_auto_new_game);
        app.cancel_menu();
        assert_eq!(app.scene, Scene::Table);
        assert_eq!(app.game.board(), &board);
        assert!(app.game.config().auto_new_game);
    }

    #[test]
    fn menu_wraps() {
        let mut app = AppState::default();
        app.open_menu();
        app.menu_prev();
        assert_eq!(app.selected_menu_item(), MenuItem::AutoNewGame);
        app.menu_next();
        assert_eq!(app.selected_menu_item(), MenuItem::SeedMode);
    }
}
