//! Modal panels drawn over the table.

use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.history_page();
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            lines.push(Line::from(entry.to_string()));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Round total: {}", app.round.total_score())));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- 1-9: select / deselect a card"),
        Line::from("- ← / →: move cursor, Enter: select card under cursor"),
        Line::from("- P: play the 5 selected cards"),
        Line::from("- D: discard the selected cards"),
        Line::from("- S: select the best scoring five"),
        Line::from("- C: clear selection"),
        Line::from("- Space / N: deal a new round"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Scoring:", bold)),
        Line::from("- total = chips × multiplier of the hand category"),
        Line::from("- only the category counts, not the ranks inside it"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply, then Space deals the first hand"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
