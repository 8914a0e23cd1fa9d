use super::mode::Mode;
use super::state::{AppState, Effect};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

/// Input understood by the list state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    MoveUp,
    MoveDown,
    /// Enter: toggle an item, open the add-new row, or commit it.
    Activate,
    Delete,
    /// Esc while adding
    Cancel,
    Quit,
    /// Any other key while adding; handed to the text input.
    Edit(KeyEvent),
}

/// Maps a key press to a list event. While adding, plain characters
/// (including `q`) and the Delete key belong to the text input.
pub fn event_for_key(key: &KeyEvent, mode: Mode) -> Option<ListEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(ListEvent::Quit);
    }

    let event = match (mode, key.code) {
        (_, KeyCode::Up) => ListEvent::MoveUp,
        (_, KeyCode::Down) => ListEvent::MoveDown,
        (_, KeyCode::Enter) => ListEvent::Activate,
        (Mode::Browsing, KeyCode::Char('k')) => ListEvent::MoveUp,
        (Mode::Browsing, KeyCode::Char('j')) => ListEvent::MoveDown,
        (Mode::Browsing, KeyCode::Char('q')) => ListEvent::Quit,
        (Mode::Browsing, KeyCode::Delete) => ListEvent::Delete,
        (Mode::Browsing, _) => return None,
        (Mode::Adding, KeyCode::Esc) => ListEvent::Cancel,
        (Mode::Adding, _) => ListEvent::Edit(*key),
    };
    Some(event)
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Effect> {
    let event = event_for_key(&key, state.mode)?;
    trace!(?event, mode = %state.mode, cursor = state.cursor_position, "list event");
    state.handle_event(event)
}
