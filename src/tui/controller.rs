use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
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
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
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

/// Map a key to an input action. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    let overlay = app.help_open() || app.history_open();
    if !overlay && matches!(code, KeyCode::Char('q' | 'Q')) {
        return true;
    }
    if let Some(action) = action_for(app, code) {
        let _ = app.handle_input(action);
    }
    false
}

// Overlays swallow every key except their own toggles and scrolling.
fn action_for(app: &AppState, code: KeyCode) -> Option<InputAction> {
    use InputAction as A;

    match code {
        KeyCode::Char('?') => return Some(A::ToggleHelp),
        KeyCode::Char('h' | 'H') => return Some(A::ToggleHistory),
        _ => {}
    }
    if app.help_open() {
        return (code == KeyCode::Esc).then_some(A::ToggleHelp);
    }
    if app.history_open() {
        return match code {
            KeyCode::Up => Some(A::HistoryUp),
            KeyCode::Down => Some(A::HistoryDown),
            KeyCode::Esc => Some(A::ToggleHistory),
            _ => None,
        };
    }

    let action = match (app.scene, code) {
        (_, KeyCode::Char('m' | 'M')) => A::ToggleMenu,

        (Scene::Menu, KeyCode::Up) => A::MenuPrev,
        (Scene::Menu, KeyCode::Down) => A::MenuNext,
        (Scene::Menu, KeyCode::Char('+' | '=') | KeyCode::Right) => A::MenuInc,
        (Scene::Menu, KeyCode::Char('-' | '_') | KeyCode::Left) => A::MenuDec,
        (Scene::Menu, KeyCode::Enter) => A::MenuApply,
        (Scene::Menu, KeyCode::Esc) => A::MenuCancel,

        (Scene::Table, KeyCode::Char(' ' | 'n' | 'N')) => A::NewRound,
        (Scene::Table, KeyCode::Char('p' | 'P')) => A::Play,
        (Scene::Table, KeyCode::Char('d' | 'D')) => A::Discard,
        (Scene::Table, KeyCode::Char('s' | 'S')) => A::Suggest,
        (Scene::Table, KeyCode::Char('c' | 'C')) => A::ClearSelection,
        (Scene::Table, KeyCode::Right) => A::CursorNext,
        (Scene::Table, KeyCode::Left) => A::CursorPrev,
        (Scene::Table, KeyCode::Enter) => A::ToggleCursor,
        (Scene::Table, KeyCode::Char(c @ '1'..='9')) => A::ToggleCard((c as u8 - b'1') as usize),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_zero_based_cards() {
        let mut app = AppState::default();
        app.scene = Scene::Table;
        assert_eq!(action_for(&app, KeyCode::Char('1')), Some(InputAction::ToggleCard(0)));
        assert_eq!(action_for(&app, KeyCode::Char('8')), Some(InputAction::ToggleCard(7)));
        assert_eq!(action_for(&app, KeyCode::Char('0')), None);
    }

    #[test]
    fn menu_keys_do_not_act_on_table() {
        let app = AppState::default();
        assert_eq!(action_for(&app, KeyCode::Char('p')), None);
        assert_eq!(action_for(&app, KeyCode::Right), Some(InputAction::MenuInc));
    }
}
