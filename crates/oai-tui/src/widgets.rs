//! Small, reusable UI helpers used by multiple screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Marker drawn in front of the focused control.
pub const FOCUS_MARKER: &str = "▶";

/// Text form of a push button.
pub fn button(label: &str, focused: bool) -> String {
    let marker = if focused { FOCUS_MARKER } else { " " };
    format!("{} [ {} ]", marker, label)
}

/// Rectangle of `percent_x` by `percent_y` centered inside `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
