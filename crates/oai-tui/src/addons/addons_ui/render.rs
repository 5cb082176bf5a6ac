use super::super::addons_app::AddonsView;
use super::content::{
    build_info_panel, build_step_lines, expected_actions, help_text, status_message, HELP_TITLE,
    STEP_NAME,
};
use crate::widgets::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, view: &AddonsView) {
    // Main layout: Title | Main Body | Key Legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Main body
                Constraint::Length(4), // Status + key legend
            ]
            .as_ref(),
        )
        .split(f.area());

    let title_line = Line::from(vec![
        Span::styled("OAI Installer", Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(STEP_NAME, Style::default().fg(Color::Cyan)),
    ]);
    let title = Block::default().borders(Borders::ALL).title(title_line);
    f.render_widget(title, main_chunks[0]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
        .split(main_chunks[1]);

    // Skip the step hint; the title bar already names the step.
    let list_items = build_step_lines(view)
        .into_iter()
        .skip(1)
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let content = List::new(list_items).block(Block::default().borders(Borders::ALL).title("Addons"));
    f.render_widget(content, body_chunks[0]);

    let info_panel = Paragraph::new(build_info_panel(view))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Info"));
    f.render_widget(info_panel, body_chunks[1]);

    let legend_text = format!("{}\n{}", status_message(view), expected_actions(view));
    let legend =
        Paragraph::new(legend_text).block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(legend, main_chunks[2]);

    if view.is_help_open() {
        let area = centered_rect(80, 80, f.area());
        let dialog = Paragraph::new(format!("{}\n\nClose: Esc, Enter or ?", help_text()))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(HELP_TITLE),
            );
        f.render_widget(Clear, area);
        f.render_widget(dialog, area);
    }
}
