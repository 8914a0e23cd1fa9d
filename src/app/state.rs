use super::event::ListEvent;
use super::mode::Mode;
use super::text_input::{PLACEHOLDER, TextInput};
use crate::checklist::{Checklist, ChecklistItem};
use crate::storage::{Store, StoreResult};
use crate::ui::theme::Theme;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long a notice replaces the status bar
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > STATUS_MESSAGE_TTL
    }
}

/// Persistence command produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ToggleChecked { index: usize, label: String },
    Insert(ChecklistItem),
    Delete { index: usize, label: String },
}

pub struct AppState {
    pub checklist: Checklist,
    /// In `0..=checklist.len()`; the last position is the add-new row.
    pub cursor_position: usize,
    pub mode: Mode,
    pub input: TextInput,
    pub should_quit: bool,
    pub status_message: Option<StatusMessage>,
    pub theme: Theme,
    pub today: String,
    pub list_state: ListState,
    store: Store,
}

impl AppState {
    pub fn new(
        checklist: Checklist,
        store: Store,
        theme: Theme,
        today: String,
        char_limit: usize,
    ) -> Self {
        let mut state = Self {
            checklist,
            cursor_position: 0,
            mode: Mode::Browsing,
            input: TextInput::new(PLACEHOLDER, char_limit),
            should_quit: false,
            status_message: None,
            theme,
            today,
            list_state: ListState::default(),
            store,
        };
        state.sync_list_state();
        state
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn is_on_add_row(&self) -> bool {
        self.cursor_position == self.checklist.len()
    }

    /// Runs one event to completion: transition, store call, then the list update.
    pub fn handle_event(&mut self, event: ListEvent) -> Option<Effect> {
        let effect = self.transition(event)?;
        match self.apply_effect(&effect) {
            Ok(()) => Some(effect),
            Err(e) => {
                warn!(?effect, error = %e, "store rejected change");
                self.set_error_message(capitalize(&e.to_string()));
                None
            }
        }
    }

    /// Updates cursor, mode and text entry. List contents are only touched by
    /// `apply_effect`, after the store accepted the change.
    pub fn transition(&mut self, event: ListEvent) -> Option<Effect> {
        match event {
            ListEvent::MoveUp => {
                self.move_cursor_up();
                None
            }
            ListEvent::MoveDown => {
                self.move_cursor_down();
                None
            }
            ListEvent::Activate => self.activate(),
            ListEvent::Delete => {
                let label = self.checklist.get(self.cursor_position)?.label.clone();
                Some(Effect::Delete {
                    index: self.cursor_position,
                    label,
                })
            }
            ListEvent::Cancel => {
                if self.mode == Mode::Adding {
                    self.cancel_adding();
                }
                None
            }
            ListEvent::Quit => {
                self.should_quit = true;
                None
            }
            ListEvent::Edit(key) => {
                if self.mode == Mode::Adding {
                    self.input.handle_key(&key);
                }
                None
            }
        }
    }

    fn activate(&mut self) -> Option<Effect> {
        if let Some(item) = self.checklist.get(self.cursor_position) {
            let label = item.label.clone();
            if self.mode == Mode::Adding {
                self.cancel_adding();
            }
            return Some(Effect::ToggleChecked {
                index: self.cursor_position,
                label,
            });
        }

        match self.mode {
            Mode::Browsing => {
                self.mode = Mode::Adding;
                self.input.focus();
                None
            }
            Mode::Adding => {
                let label = self.input.value().trim().to_string();
                if label.is_empty() {
                    self.set_error_message("Item label cannot be empty".to_string());
                    return None;
                }
                Some(Effect::Insert(ChecklistItem::new(
                    label,
                    true,
                    self.today.clone(),
                )))
            }
        }
    }

    pub fn apply_effect(&mut self, effect: &Effect) -> StoreResult<()> {
        match effect {
            Effect::ToggleChecked { index, label } => {
                self.store.toggle_checked(label)?;
                self.checklist.toggle(*index);
                debug!(label = %label, "toggled item");
            }
            Effect::Insert(item) => {
                self.store.insert(&item.label, &item.date, item.checked)?;
                self.cursor_position = self.checklist.push(item.clone());
                self.input.reset();
                self.mode = Mode::Browsing;
                info!(label = %item.label, "added item");
                self.set_status_message(format!("Added \"{}\"", item.label));
            }
            Effect::Delete { index, label } => {
                let removed = self.store.delete_by_label(label)?;
                if removed != 1 {
                    warn!(label = %label, removed, "unexpected row count on delete");
                }
                self.checklist.remove(*index);
                self.clamp_cursor();
                info!(label = %label, "deleted item");
            }
        }
        self.sync_list_state();
        Ok(())
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if self.mode == Mode::Adding {
                self.cancel_adding();
            }
        }
        self.sync_list_state();
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_position < self.checklist.len() {
            self.cursor_position += 1;
        }
        self.sync_list_state();
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor_position = self.cursor_position.min(self.checklist.len());
        self.sync_list_state();
    }

    fn cancel_adding(&mut self) {
        self.input.reset();
        self.mode = Mode::Browsing;
    }

    pub fn sync_list_state(&mut self) {
        self.list_state.select(Some(self.cursor_position));
    }

    pub fn set_status_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    pub fn set_error_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    pub fn clear_expired_status_message(&mut self) {
        if self.status_message.as_ref().is_some_and(StatusMessage::is_expired) {
            self.status_message = None;
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    const TODAY: &str = "19-10-2026";

    fn state_with(labels: &[&str]) -> AppState {
        let store = Store::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        let mut list = Checklist::new();
        for label in labels {
            store.insert(label, TODAY, false).unwrap();
            list.push(ChecklistItem::new(*label, false, TODAY));
        }
        AppState::new(list, store, Theme::default(), TODAY.to_string(), 20)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            state.handle_event(ListEvent::Edit(key));
        }
    }

    fn add_item(state: &mut AppState, text: &str) -> Option<Effect> {
        state.cursor_position = state.checklist.len();
        state.handle_event(ListEvent::Activate);
        type_text(state, text);
        state.handle_event(ListEvent::Activate)
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = state_with(&["A", "B", "C"]);
        let moves = [
            ListEvent::MoveUp,
            ListEvent::MoveUp,
            ListEvent::MoveDown,
            ListEvent::MoveDown,
            ListEvent::MoveDown,
            ListEvent::MoveDown,
            ListEvent::MoveDown,
            ListEvent::MoveUp,
            ListEvent::MoveDown,
            ListEvent::MoveDown,
        ];
        for event in moves {
            state.handle_event(event);
            assert!(state.cursor_position <= state.checklist.len());
        }
        assert_eq!(state.cursor_position, 3);
        assert!(state.is_on_add_row());

        let mut empty = state_with(&[]);
        empty.handle_event(ListEvent::MoveUp);
        empty.handle_event(ListEvent::MoveDown);
        assert_eq!(empty.cursor_position, 0);
    }

    #[test]
    fn test_toggle_twice_is_net_noop() {
        let mut state = state_with(&["A", "B"]);
        state.cursor_position = 1;

        let effect = state.handle_event(ListEvent::Activate);
        assert_eq!(
            effect,
            Some(Effect::ToggleChecked {
                index: 1,
                label: "B".to_string()
            })
        );
        assert!(state.checklist.items[1].checked);
        assert!(state.store().is_checked("B").unwrap());

        state.handle_event(ListEvent::Activate);
        assert!(!state.checklist.items[1].checked);
        assert!(!state.store().is_checked("B").unwrap());
        assert!(!state.checklist.items[0].checked);
    }

    #[test]
    fn test_activate_on_add_row_enters_adding() {
        let mut state = state_with(&["A"]);
        state.handle_event(ListEvent::MoveDown);
        assert_eq!(state.handle_event(ListEvent::Activate), None);
        assert_eq!(state.mode, Mode::Adding);
        assert!(state.input.is_focused());
    }

    #[test]
    fn test_insert_round_trip() {
        let mut state = state_with(&["A", "B"]);
        let effect = add_item(&mut state, "Eggs");

        assert_eq!(
            effect,
            Some(Effect::Insert(ChecklistItem::new("Eggs", true, TODAY)))
        );
        assert_eq!(state.checklist.labels(), vec!["A", "B", "Eggs"]);
        assert!(state.checklist.items[2].checked);
        assert_eq!(state.cursor_position, 2);
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.input.value(), "");
        assert!(!state.input.is_focused());

        let stored = state.store().list_items().unwrap();
        assert_eq!(stored.last(), Some(&ChecklistItem::new("Eggs", true, TODAY)));
        assert_eq!(stored.iter().filter(|i| i.label == "Eggs").count(), 1);
    }

    #[test]
    fn test_duplicate_insert_leaves_list_unchanged() {
        let mut state = state_with(&["Eggs"]);
        let effect = add_item(&mut state, "Eggs");

        assert_eq!(effect, None);
        assert_eq!(state.checklist.labels(), vec!["Eggs"]);
        assert_eq!(state.store().list_labels().unwrap(), vec!["Eggs"]);
        assert_eq!(state.mode, Mode::Adding);
        assert_eq!(state.input.value(), "Eggs");

        let message = state.status_message.as_ref().unwrap();
        assert!(message.is_error);
        assert!(message.text.contains("already on the list"));
    }

    #[test]
    fn test_empty_entry_is_not_committed() {
        let mut state = state_with(&[]);
        let effect = add_item(&mut state, "   ");
        assert_eq!(effect, None);
        assert!(state.checklist.is_empty());
        assert!(state.status_message.as_ref().unwrap().is_error);
        assert_eq!(state.mode, Mode::Adding);
    }

    #[test]
    fn test_delete_first_of_two() {
        let mut state = state_with(&["A", "B"]);
        let effect = state.handle_event(ListEvent::Delete);

        assert_eq!(
            effect,
            Some(Effect::Delete {
                index: 0,
                label: "A".to_string()
            })
        );
        assert_eq!(state.checklist.labels(), vec!["B"]);
        assert_eq!(state.store().list_labels().unwrap(), vec!["B"]);
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_delete_keeps_check_marks_on_the_right_items() {
        let mut state = state_with(&["A", "B", "C"]);
        state.cursor_position = 2;
        state.handle_event(ListEvent::Activate);
        state.cursor_position = 0;
        state.handle_event(ListEvent::Delete);

        assert_eq!(state.checklist.labels(), vec!["B", "C"]);
        assert!(!state.checklist.items[0].checked);
        assert!(state.checklist.items[1].checked);
    }

    #[test]
    fn test_delete_last_item_and_empty_list() {
        let mut state = state_with(&["A"]);
        state.handle_event(ListEvent::Delete);
        assert!(state.checklist.is_empty());
        assert_eq!(state.cursor_position, 0);

        assert_eq!(state.handle_event(ListEvent::Delete), None);
        assert!(state.checklist.is_empty());
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_delete_on_add_row_is_noop() {
        let mut state = state_with(&["A", "B"]);
        state.cursor_position = 2;
        assert_eq!(state.handle_event(ListEvent::Delete), None);
        assert_eq!(state.checklist.len(), 2);
    }

    #[test]
    fn test_moving_off_add_row_cancels_entry() {
        let mut state = state_with(&["A"]);
        state.handle_event(ListEvent::MoveDown);
        state.handle_event(ListEvent::Activate);
        type_text(&mut state, "Te");
        state.handle_event(ListEvent::MoveUp);

        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.input.value(), "");
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_cancel_resets_entry() {
        let mut state = state_with(&[]);
        state.handle_event(ListEvent::Activate);
        type_text(&mut state, "Tea");
        state.handle_event(ListEvent::Cancel);

        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.input.value(), "");
        assert!(state.checklist.is_empty());
    }

    #[test]
    fn test_edit_ignored_while_browsing() {
        let mut state = state_with(&["A"]);
        type_text(&mut state, "xyz");
        assert_eq!(state.input.value(), "");
    }

    #[test]
    fn test_store_failure_keeps_toggle_in_memory_unchanged() {
        let mut state = state_with(&["A"]);
        state.store().delete_by_label("A").unwrap();

        assert_eq!(state.handle_event(ListEvent::Activate), None);
        assert!(!state.checklist.items[0].checked);
        assert!(state.status_message.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_quit() {
        let mut state = state_with(&["A"]);
        assert_eq!(state.handle_event(ListEvent::Quit), None);
        assert!(state.should_quit);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("database error"), "Database error");
        assert_eq!(capitalize(""), "");
    }
}
