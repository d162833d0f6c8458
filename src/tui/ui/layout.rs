use ratatui::layout::Constraint;
use ratatui::prelude::{Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Split `area` into `n` equal columns.
pub(super) fn columns(area: Rect, n: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, u32::from(n.max(1)))).collect::<Vec<_>>())
        .split(area)
}
