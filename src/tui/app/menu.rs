use crate::deck::STANDARD_SIZE;
use crate::evaluator::HAND_CARDS;
use crate::round::Round;

use super::{AppState, Scene};

const MAX_BUDGET: u32 = 99;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    HandSize,
    Plays,
    Discards,
    Seed,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::HandSize, MenuItem::Plays, MenuItem::Discards, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg_hand_size),
            MenuItem::Plays => format!("Plays per Round: {}", app.cfg_max_plays),
            MenuItem::Discards => format!("Discards per Round: {}", app.cfg_max_discards),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size < STANDARD_SIZE {
                    app.cfg_hand_size += 1;
                }
            }
            MenuItem::Plays => {
                app.cfg_max_plays = (app.cfg_max_plays + 1).min(MAX_BUDGET);
            }
            MenuItem::Discards => {
                app.cfg_max_discards = (app.cfg_max_discards + 1).min(MAX_BUDGET);
            }
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(0, |s| s.saturating_add(1)));
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size > HAND_CARDS {
                    app.cfg_hand_size -= 1;
                }
            }
            MenuItem::Plays => {
                app.cfg_max_plays = app.cfg_max_plays.saturating_sub(1);
            }
            MenuItem::Discards => {
                app.cfg_max_discards = app.cfg_max_discards.saturating_sub(1);
            }
            MenuItem::Seed => {
                // Stepping below zero goes back to an entropy seed.
                app.cfg_seed = match app.cfg_seed {
                    Some(0) | None => None,
                    Some(s) => Some(s - 1),
                };
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        let cfg = *self.round.config();
        self.cfg_hand_size = cfg.hand_size;
        self.cfg_max_plays = cfg.max_plays;
        self.cfg_max_discards = cfg.max_discards;
        self.cfg_seed = self.seed;
        self.scene = Scene::Menu;
    }

    /// Rebuild the round from the edited settings. The new round waits for a deal.
    pub fn apply_menu(&mut self) {
        self.cfg_hand_size = self.cfg_hand_size.clamp(HAND_CARDS, STANDARD_SIZE);
        let cfg = self.pending_config();
        let built = match self.cfg_seed {
            Some(seed) => Round::seeded(cfg, seed),
            None => Round::new(cfg),
        };
        match built {
            Ok(round) => {
                log::debug!("menu applied: {cfg:?} seed {:?}", self.cfg_seed);
                self.round = round;
                self.seed = self.cfg_seed;
                self.reset_view();
                self.scene = Scene::Table;
            }
            Err(err) => log::warn!("menu settings rejected: {err}"),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
