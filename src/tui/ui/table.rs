use crate::cards::{Card, Suit};
use crate::evaluator::HAND_CARDS;
use crate::round::RoundState;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{columns, inner};

const CARD_WIDTH: u16 = 9;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let status_height: u16 = 3 + 2; // content + borders
    let [header_area, result_area, hand_area, status_area] = Layout::vertical([
        Constraint::Length(4), // header
        Constraint::Length(3), // last result
        Constraint::Min(5),    // hand
        Constraint::Length(status_height),
    ])
    .areas(f.area());

    draw_header(f, app, header_area);
    draw_last_result(f, app, result_area);
    draw_hand(f, app, hand_area);
    draw_status(f, app, status_area);
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let round = &app.round;
    let cfg = round.config();
    let seed = app.seed.map(|s| format!("  Seed: {s}")).unwrap_or_default();
    let lines = vec![
        Line::from(format!(
            "Plays: {}/{}   Discards: {}/{}   Deck: {}",
            round.plays_remaining(),
            cfg.max_plays,
            round.discards_remaining(),
            cfg.max_discards,
            round.deck_remaining()
        )),
        Line::from(vec![
            Span::styled(
                format!("Score: {}", round.total_score()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   Round: {}{seed}", round.status().label())),
        ]),
    ];
    let header =
        Paragraph::new(lines).block(Block::default().title("balatro-rs").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_last_result(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match app.last_result() {
        Some(r) => Line::from(vec![
            Span::styled(r.name(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("   {} chips × {} mult = ", r.chips(), r.multiplier())),
            Span::styled(r.total().to_string(), Style::default().fg(Color::Green)),
        ]),
        None => Line::from(Span::styled(
            "No hand played yet",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    let para = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Last Hand").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_hand(f: &mut Frame, app: &AppState, area: Rect) {
    let title = match app.preview() {
        Some(r) => format!("Hand ({} selected: {})", app.selected().len(), r.name()),
        None => format!("Hand ({} selected)", app.selected().len()),
    };
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);
    let hand_inner = inner(area);

    let hand = app.round.hand();
    if hand.is_empty() {
        let msg = if app.round.is_started() {
            "No cards left."
        } else {
            "Round not started: press Space to deal."
        };
        f.render_widget(Paragraph::new(msg).alignment(Alignment::Center), hand_inner);
        return;
    }

    // Selected cards sit one row higher than the rest.
    let [lifted, resting] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(hand_inner);
    let row = Rect { height: lifted.height + resting.height.min(4), ..lifted };
    let slots = columns(row, hand.len(), CARD_WIDTH);
    for (i, card) in hand.iter() {
        let selected = app.is_selected(i);
        let mut slot = slots[i];
        slot.height = slot.height.saturating_sub(1);
        if !selected {
            slot.y += 1;
        }
        let border = match (selected, i == app.cursor) {
            (true, true) => Color::Magenta,
            (true, false) => Color::Yellow,
            (false, true) => Color::Cyan,
            (false, false) => Color::Gray,
        };
        render_card_widget(f, slot, card, (i + 1).to_string(), border);
    }
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .areas(inner(area));

    let round = &app.round;
    let mut left_info = match round.status() {
        RoundState::NotStarted => vec![Line::from("Press Space to deal a new round.")],
        RoundState::Exhausted => {
            vec![Line::from("Deck exhausted: press Space for a new round.")]
        }
        _ if round.plays_remaining() == 0 => {
            vec![Line::from("No plays left: press Space for a new round.")]
        }
        _ => vec![Line::from("Select cards with 1-9 or ←/→ and Enter.")],
    };

    if let Some(msg) = app.message() {
        let style = if app.message_is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        left_info.push(Line::from(Span::styled(msg.to_string(), style)));
    }

    let picked = app.selected().len();
    let in_progress = round.status() == RoundState::InProgress;
    let play_enabled = in_progress && round.plays_remaining() > 0 && picked == HAND_CARDS;
    let discard_enabled = in_progress && round.discards_remaining() > 0 && picked > 0;
    let suggest_enabled = in_progress && round.hand().len() >= HAND_CARDS;
    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    left_info.push(Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("P play", action_style(play_enabled)),
        Span::raw(" • "),
        Span::styled("D discard", action_style(discard_enabled)),
        Span::raw(" • "),
        Span::styled("S suggest", action_style(suggest_enabled)),
        Span::raw(" • "),
        Span::styled("C clear", action_style(picked > 0)),
    ]));

    let right_keys = vec![
        Line::from(""),
        Line::from("? help • H history • M menu"),
        Line::from("Space new round • Q quit"),
    ];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), left);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        right,
    );
}

fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Card, label: String, border: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(label)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(border));
    let card_inner = inner(area);
    f.render_widget(block, area);
    let content = Line::from(Span::styled(card.to_string(), suit_style(card.suit())));
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), card_inner);
}
