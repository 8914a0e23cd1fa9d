use crate::app::AppState;
use crate::app::mode::Mode;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

pub const HEADER: &str = "What do you have to have today?";
pub const FOOTER: [&str; 2] = ["Press Delete to delete an item.", "Press q to quit."];

const CURSOR_MARKER: char = '>';
/// Width of the `"> [x] "` prefix in front of every label.
const ROW_PREFIX_WIDTH: u16 = 6;

fn cursor_marker(state: &AppState, index: usize) -> char {
    if state.cursor_position == index { CURSOR_MARKER } else { ' ' }
}

/// Check mark of a row; the add-new row is marked while an entry is open.
fn check_marker(state: &AppState, index: usize) -> char {
    match state.checklist.get(index) {
        Some(item) => item.check_marker(),
        None if state.mode == Mode::Adding => 'x',
        None => ' ',
    }
}

fn row_label(state: &AppState, index: usize) -> String {
    match state.checklist.get(index) {
        Some(item) => item.label.clone(),
        None => state.input.view(),
    }
}

/// One row as plain text: `"> [x] label"`. Shared with `checklist show`.
pub fn format_row(cursor: char, check: char, label: &str) -> String {
    format!("{cursor} [{check}] {label}")
}

pub fn row_text(state: &AppState, index: usize) -> String {
    format_row(
        cursor_marker(state, index),
        check_marker(state, index),
        &row_label(state, index),
    )
}

/// Plain-text projection of the whole screen, status bar excluded.
pub fn render_text(state: &AppState) -> String {
    let mut out = format!("{HEADER}\n\n");
    for index in 0..=state.checklist.len() {
        out.push_str(&row_text(state, index));
        out.push('\n');
    }
    out.push('\n');
    for line in FOOTER {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = &state.theme;
    let items: Vec<ListItem> = (0..=state.checklist.len())
        .map(|index| {
            let is_cursor = state.cursor_position == index;
            let check = check_marker(state, index);

            let marker_style = Style::default()
                .fg(theme.cursor)
                .add_modifier(Modifier::BOLD);
            let check_style = if check == ' ' {
                Style::default().fg(theme.foreground)
            } else {
                Style::default().fg(theme.checked)
            };
            let is_add_row = index == state.checklist.len();
            let label_style = if is_add_row && state.input.shows_placeholder() {
                Style::default().fg(theme.placeholder)
            } else if is_cursor {
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };

            // The terminal cursor marks the caret on the add row, see below
            let label = if is_add_row {
                state.input.display_text().to_string()
            } else {
                row_label(state, index)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", cursor_marker(state, index)), marker_style),
                Span::styled(format!("[{check}] "), check_style),
                Span::styled(label, label_style),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().bg(theme.background));
    f.render_stateful_widget(list, area, &mut state.list_state);

    if state.mode == Mode::Adding {
        let row = state
            .checklist
            .len()
            .saturating_sub(state.list_state.offset());
        let caret = u16::try_from(state.input.caret_column()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(ROW_PREFIX_WIDTH)
            .saturating_add(caret)
            .min(area.right().saturating_sub(1));
        let y = area.y.saturating_add(row as u16);
        if y < area.bottom() {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}
