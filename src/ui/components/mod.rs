pub mod checklist;
pub mod status_bar;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Checklist
            Constraint::Length(3), // Help footer
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let header = Paragraph::new(Line::styled(
        checklist::HEADER,
        Style::default()
            .fg(state.theme.header)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(header, chunks[0]);

    checklist::render(f, state, chunks[1]);

    let footer_style = Style::default().fg(state.theme.footer);
    let mut footer = vec![Line::from("")];
    footer.extend(
        checklist::FOOTER
            .iter()
            .map(|line| Line::styled(*line, footer_style)),
    );
    f.render_widget(Paragraph::new(footer), chunks[2]);

    status_bar::render(f, state, chunks[3]);
}
