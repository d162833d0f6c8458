use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(70, 70, size);
    let block = Block::default().title("seahaven").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo = r#"
  ___             _
 / __| ___  __ _ | |_   __ _ __ __ ___  _ _
 \__ \/ -_)/ _` || ' \ / _` |\ V // -_)| ' \
 |___/\___|\__,_||_||_|\__,_| \_/ \___||_||_|
                                             "#;

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let config_items = app.menu_items_display();
    let hints = [
        String::from("[Enter] Apply (new session)  [Esc] Cancel  [Q] Quit"),
        String::from("[↑/↓] Move  [+/-] Adjust  [0-9] Type seed"),
    ];
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Settings:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in config_items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    cfg_lines.push(Line::from(""));
    for hint in hints {
        cfg_lines
            .push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
