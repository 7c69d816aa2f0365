use crate::config::RoundConfig;
use crate::evaluator::{best_play, evaluate, HandResult, HAND_CARDS};
use crate::round::{Round, RoundEvent};
use std::collections::BTreeSet;
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
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewRound,
    ToggleCard(usize),
    CursorNext,
    CursorPrev,
    ToggleCursor,
    ClearSelection,
    Suggest,
    Play,
    Discard,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core round instance
    pub round: Round,
    // Seed the current round was built with, None for entropy
    pub seed: Option<u64>,
    // Hand position under the cursor
    pub cursor: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_hand_size: usize,
    pub cfg_max_plays: u32,
    pub cfg_max_discards: u32,
    pub cfg_seed: Option<u64>,
    selected: BTreeSet<usize>,
    last_result: Option<HandResult>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    message: Option<String>,
    message_is_error: bool,
    message_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_round(Round::default(), None)
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const MESSAGE_TTL: Duration = Duration::from_secs(3);

    /// Start on the menu scene with the given round loaded.
    pub fn with_round(round: Round, seed: Option<u64>) -> Self {
        let cfg = *round.config();
        Self {
            scene: Scene::Menu,
            round,
            seed,
            cursor: 0,
            menu_index: 0,
            cfg_hand_size: cfg.hand_size,
            cfg_max_plays: cfg.max_plays,
            cfg_max_discards: cfg.max_discards,
            cfg_seed: seed,
            selected: BTreeSet::new(),
            last_result: None,
            help_open: false,
            history_open: false,
            history_offset: 0,
            message: None,
            message_is_error: false,
            message_at: None,
        }
    }

    pub(crate) fn pending_config(&self) -> RoundConfig {
        RoundConfig::default()
            .with_hand_size(self.cfg_hand_size)
            .with_max_plays(self.cfg_max_plays)
            .with_max_discards(self.cfg_max_discards)
    }

    /// Selected hand positions, ascending.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn last_result(&self) -> Option<HandResult> {
        self.last_result
    }

    /// Score the current selection if it is a complete hand.
    pub fn preview(&self) -> Option<HandResult> {
        if self.selected.len() != HAND_CARDS {
            return None;
        }
        let hand = self.round.hand();
        let cards: Option<Vec<_>> = self.selected.iter().map(|&i| hand.get(i)).collect();
        cards.and_then(|c| evaluate(&c).ok())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn message_is_error(&self) -> bool {
        self.message_is_error
    }

    fn set_message(&mut self, text: String, is_error: bool) {
        self.message = Some(text);
        self.message_is_error = is_error;
        self.message_at = Some(Instant::now());
    }

    fn clear_message(&mut self) {
        self.message = None;
        self.message_is_error = false;
        self.message_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    /// Up to a page of events, most recent last, scrolled back by the offset.
    pub fn history_page(&self) -> &[RoundEvent] {
        let events = self.round.history();
        let end = events.len().saturating_sub(self.history_offset);
        let start = end.saturating_sub(Self::HISTORY_PAGE_SIZE);
        &events[start..end]
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn can_act(&self) -> bool {
        self.scene == Scene::Table && self.round.is_started()
    }

    fn toggle_card(&mut self, index: usize) {
        if index >= self.round.hand().len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        self.cursor = index;
    }

    fn move_cursor(&mut self, forward: bool) {
        let n = self.round.hand().len();
        if n == 0 {
            return;
        }
        self.cursor = if forward { (self.cursor + 1) % n } else { (self.cursor + n - 1) % n };
    }

    fn after_hand_change(&mut self) {
        self.selected.clear();
        let n = self.round.hand().len();
        if self.cursor >= n {
            self.cursor = n.saturating_sub(1);
        }
    }

    fn play_selected(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        match self.round.play(&indices) {
            Ok(result) => {
                self.last_result = Some(result);
                self.after_hand_change();
                self.set_message(format!("Scored {result}"), false);
                true
            }
            Err(err) => {
                self.set_message(err.to_string(), true);
                false
            }
        }
    }

    fn discard_selected(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        match self.round.discard(&indices) {
            Ok(cards) => {
                self.after_hand_change();
                self.set_message(format!("Discarded {} cards", cards.len()), false);
                true
            }
            Err(err) => {
                self.set_message(err.to_string(), true);
                false
            }
        }
    }

    fn suggest(&mut self) {
        if !self.can_act() {
            return;
        }
        match best_play(self.round.hand().as_slice()) {
            Some(s) => {
                self.selected = s.indices.into_iter().collect();
                self.set_message(format!("Suggested {}", s.result), false);
            }
            None => self.set_message("Fewer than five cards in hand".to_string(), true),
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.round.history().len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
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
            InputAction::NewRound => {
                if self.scene == Scene::Table {
                    self.new_round();
                }
                false
            }
            InputAction::ToggleCard(idx) => {
                if self.can_act() {
                    self.toggle_card(idx);
                }
                false
            }
            InputAction::CursorNext => {
                if self.can_act() {
                    self.move_cursor(true);
                }
                false
            }
            InputAction::CursorPrev => {
                if self.can_act() {
                    self.move_cursor(false);
                }
                false
            }
            InputAction::ToggleCursor => {
                if self.can_act() {
                    self.toggle_card(self.cursor);
                }
                false
            }
            InputAction::ClearSelection => {
                self.selected.clear();
                false
            }
            InputAction::Suggest => {
                self.suggest();
                false
            }
            InputAction::Play => self.play_selected(),
            InputAction::Discard => self.discard_selected(),
        }
    }

    pub fn new_round(&mut self) {
        self.round.start();
        self.reset_view();
    }

    pub(crate) fn reset_view(&mut self) {
        self.selected.clear();
        self.cursor = 0;
        self.last_result = None;
        self.history_offset = 0;
        self.clear_message();
    }

    /// Expire the status message once it has been shown long enough.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.message_at {
            if at.elapsed() >= Self::MESSAGE_TTL {
                self.clear_message();
            }
        }
    }
}
