use crate::board::{NUM_CELLS, NUM_COLUMNS, NUM_PILES, PILE_SIZE};
use crate::cards::{Card, Suit};
use crate::tui::app::{AppState, MessageKind};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &mut AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // foundation + cells
            Constraint::Min(8),    // tableau + log
            Constraint::Length(3), // status
            Constraint::Length(3), // command entry
        ])
        .split(size);

    let board = app.game.board();
    let header = Paragraph::new(Line::from(format!(
        "Deal #{}   Seed: {}   Foundation: {}/{}   Legal moves: {}",
        app.game.deal_number(),
        app.game.deal_seed(),
        board.foundation_len(),
        PILE_SIZE * NUM_PILES,
        board.legal_moves().len(),
    )))
    .block(Block::default().title("Seahaven").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Top row mirrors the text layout: piles 1-2, cells 1-4, piles 3-4
    let slots = columns(chunks[1], (NUM_PILES + NUM_CELLS) as u16);
    for pile in 0..2 {
        let title = format!("F{}", pile + 1);
        render_card_widget(f, slots[pile], board.pile_top(pile), &title, Some(Color::Green));
    }
    for cell in 0..NUM_CELLS {
        let title = format!("C{}", cell + 1);
        render_card_widget(f, slots[2 + cell], board.cell(cell), &title, Some(Color::Cyan));
    }
    for pile in 2..NUM_PILES {
        let title = format!("F{}", pile + 1);
        let slot = slots[NUM_CELLS + pile];
        render_card_widget(f, slot, board.pile_top(pile), &title, Some(Color::Green));
    }

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(chunks[2]);
    draw_tableau(f, middle[0], app);
    draw_log(f, middle[1], app);

    let status_line = match app.message() {
        Some(msg) => {
            let color = match msg.kind {
                MessageKind::Info => Color::Green,
                MessageKind::Error => Color::Red,
            };
            Line::from(Span::styled(msg.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            "? help • Tab settings • ↑/↓ scroll log • Ctrl-C quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    let status = Paragraph::new(status_line)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, chunks[3]);

    let entry = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(app.entry_text().to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(
        Block::default().title("Command (MTT,MTC,MCT,MTF,MCF,R,H,Q)").borders(Borders::ALL),
    );
    f.render_widget(entry, chunks[4]);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_tableau(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().title("Tableau").borders(Borders::ALL), area);
    let cols = columns(inner(area), NUM_COLUMNS as u16);
    for (i, column) in app.game.board().columns().iter().enumerate() {
        let mut lines: Vec<Line> = Vec::with_capacity(column.len() + 1);
        lines.push(Line::from(Span::styled(
            format!("{:^5}", i + 1),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        for (depth, card) in column.iter().enumerate() {
            let mut style = card_style(card.suit());
            if depth + 1 == column.len() {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            lines.push(Line::from(Span::styled(format!("{:^5}", short_card(*card)), style)));
        }
        if column.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{:^5}", "--"),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        f.render_widget(Paragraph::new(lines), cols[i]);
    }
}

fn draw_log(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = Block::default().title("Log").borders(Borders::ALL);
    app.set_log_page(usize::from(inner(area).height));
    let entries = app.game.history_recent_offset(app.log_page(), app.history_offset());
    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| Line::from(format!("#{} {}", entry.deal, entry.event)))
        .collect();
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(para, area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Commands (type, then Enter):", bold)),
        Line::from("- MTT s d: tableau column s to tableau column d"),
        Line::from("- MTC s d: tableau column s to cell d"),
        Line::from("- MCT s d: cell s to tableau column d"),
        Line::from("- MTF s d: tableau column s to foundation d"),
        Line::from("- MCF s d: cell s to foundation d"),
        Line::from("- R: restart with a new shuffle"),
        Line::from("- H: this help"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- Tableau: same suit, one rank lower; only a King on an empty column"),
        Line::from("- Foundation: same suit, one rank higher, starting from the Ace"),
        Line::from("- Cells hold any single card"),
        Line::from(""),
        Line::from(Span::styled("Keys:", bold)),
        Line::from("- Tab: settings • ↑/↓: scroll log • Esc: clear entry • Ctrl-C: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn card_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn short_card(c: Card) -> String {
    let rank = match c.rank().value() {
        10 => "10".to_string(),
        _ => c.rank().to_char().to_string(),
    };
    format!("{}{}", rank, c.suit().glyph())
}

fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<Card>,
    title: &str,
    border: Option<Color>,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(short_card(c), card_style(c.suit()))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
