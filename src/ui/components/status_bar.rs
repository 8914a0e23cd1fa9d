use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn status_text(state: &AppState, width: u16) -> String {
    let left_content = format!(
        " {} | {} items, {} checked | {}",
        state.mode,
        state.checklist.len(),
        state.checklist.checked_count(),
        state.today
    );
    let right_content = format!("Enter toggle/add  v{VERSION} ");

    let padding = (width as usize).saturating_sub(left_content.width() + right_content.width());
    format!("{left_content}{:padding$}{right_content}", "")
}

/// Pads `text` with spaces up to `width` display columns.
fn pad_to_width(text: &str, width: u16) -> String {
    let padding = (width as usize).saturating_sub(text.width());
    format!("{text}{:padding$}", "")
}

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if let Some(message) = &state.status_message
        && !message.is_expired()
    {
        let bg = if message.is_error {
            state.theme.error_bg
        } else {
            state.theme.notice_bg
        };
        render_status_message(f, &message.text, bg, area);
        return;
    }

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status = Paragraph::new(Line::from(vec![Span::styled(
        status_text(state, area.width),
        style,
    )]));
    f.render_widget(status, area);
}

fn render_status_message(f: &mut Frame, message: &str, bg: ratatui::style::Color, area: Rect) {
    let display_message = format!(" {message} ");

    let style = Style::default()
        .fg(ratatui::style::Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let status_line = pad_to_width(&display_message, area.width);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
