use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____        _       _
| __ )  __ _| | __ _| |_ _ __ ___
|  _ \ / _` | |/ _` | __| '__/ _ \
| |_) | (_| | | (_| | |_| | | (_) |
|____/ \__,_|_|\__,_|\__|_|  \___/
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 70, f.area());
    let block = Block::default().title("balatro-rs").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();
    let suits = Line::from(vec![
        Span::styled("♠ ", Style::default().fg(Color::White)),
        Span::styled("♥ ", Style::default().fg(Color::Red)),
        Span::styled("♦ ", Style::default().fg(Color::Red)),
        Span::styled("♣", Style::default().fg(Color::White)),
    ]);

    let [logo_area, cfg_area] =
        Layout::vertical([Constraint::Length(logo_lines.len() as u16 + 2), Constraint::Min(3)])
            .areas(inner_all);

    let mut top = logo_lines;
    top.push(suits);
    f.render_widget(Paragraph::new(top).alignment(Alignment::Center), logo_area);

    let mut cfg_lines: Vec<Line> = vec![Line::from(Span::styled(
        "Round settings:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(item, style)));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Esc] Back  [↑/↓] Move  [+/-] Adjust  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, cfg_area);
}
