use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "Add New Item";
pub const CARET: char = '█';

/// Single-line editor behind the add-new row.
///
/// `cursor` is a byte offset into `value` and always sits on a char boundary.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
    /// Maximum number of chars, 0 for no limit
    char_limit: usize,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>, char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: placeholder.into(),
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Clears the text and drops focus.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.focused = false;
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        if self.char_limit > 0 && self.value.chars().count() >= self.char_limit {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_boundary(&self.value, self.cursor);
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = next_boundary(&self.value, self.cursor);
        self.value.drain(self.cursor..end);
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_boundary(&self.value, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_boundary(&self.value, self.cursor);
    }

    pub fn move_word_left(&mut self) {
        self.cursor = word_start_before(&self.value, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = word_start_after(&self.value, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Applies an editing key. Returns false when the key means nothing to the input.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
            }
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char('u') if ctrl => {
                self.value.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left if ctrl => self.move_word_left(),
            KeyCode::Right if ctrl => self.move_word_right(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Placeholder while empty and unfocused, otherwise the text with a caret when focused.
    pub fn view(&self) -> String {
        if !self.focused {
            if self.value.is_empty() {
                return self.placeholder.clone();
            }
            return self.value.clone();
        }
        let mut view = String::with_capacity(self.value.len() + CARET.len_utf8());
        view.push_str(&self.value[..self.cursor]);
        view.push(CARET);
        view.push_str(&self.value[self.cursor..]);
        view
    }

    /// Same as `view` without the drawn caret, for when the terminal cursor marks it.
    pub fn display_text(&self) -> &str {
        if self.shows_placeholder() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        !self.focused && self.value.is_empty()
    }

    /// Display column of the caret, counted from the start of the text.
    pub fn caret_column(&self) -> usize {
        self.value[..self.cursor].width()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new(PLACEHOLDER, 20)
    }
}

fn prev_boundary(s: &str, index: usize) -> usize {
    s[..index]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(s: &str, index: usize) -> usize {
    s[index..]
        .chars()
        .next()
        .map(|c| index + c.len_utf8())
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_start_before(s: &str, index: usize) -> usize {
    let mut chars = s[..index].char_indices().rev().peekable();
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
    let mut start = chars.peek().map(|(i, _)| *i).unwrap_or(0);
    while let Some((i, _)) = chars.next_if(|(_, c)| is_word_char(*c)) {
        start = i;
    }
    start
}

fn word_start_after(s: &str, index: usize) -> usize {
    let mut chars = s[index..].char_indices().peekable();
    while chars.next_if(|(_, c)| is_word_char(*c)).is_some() {}
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
    chars.peek().map(|(i, _)| index + i).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new(PLACEHOLDER, 0);
        input.focus();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_placeholder_only_when_empty_and_unfocused() {
        let mut input = TextInput::default();
        assert_eq!(input.view(), "Add New Item");
        assert!(input.shows_placeholder());

        input.focus();
        assert_eq!(input.view(), "█");
        assert!(!input.shows_placeholder());
    }

    #[test]
    fn test_typing_and_caret_position() {
        let mut input = typed("Eggs");
        assert_eq!(input.view(), "Eggs█");
        input.move_left();
        input.move_left();
        assert_eq!(input.view(), "Eg█gs");
        assert_eq!(input.caret_column(), 2);
        assert_eq!(input.display_text(), "Eggs");
    }

    #[test]
    fn test_caret_column_counts_display_width() {
        let mut input = typed("茶ö");
        assert_eq!(input.caret_column(), 3);
        input.move_left();
        assert_eq!(input.cursor(), 3);
        assert_eq!(input.caret_column(), 2);
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new(PLACEHOLDER, 3);
        assert!(input.insert_char('a'));
        assert!(input.insert_char('b'));
        assert!(input.insert_char('c'));
        assert!(!input.insert_char('d'));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_backspace_and_delete_on_multibyte() {
        let mut input = typed("aöb");
        input.backspace();
        assert_eq!(input.value(), "aö");
        input.backspace();
        assert_eq!(input.value(), "a");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.value(), "");
        input.backspace();
        input.delete_forward();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_left_right_stop_at_edges() {
        let mut input = typed("ö");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_word_movement() {
        let mut input = typed("hello, big world");
        input.move_word_left();
        assert_eq!(input.cursor(), 11);
        input.move_word_left();
        assert_eq!(input.cursor(), 7);
        input.move_word_left();
        assert_eq!(input.cursor(), 0);
        input.move_word_right();
        assert_eq!(input.cursor(), 7);
        input.move_word_right();
        assert_eq!(input.cursor(), 11);
        input.move_word_right();
        assert_eq!(input.cursor(), 16);
    }

    #[test]
    fn test_handle_key_editing() {
        let mut input = typed("Milk");
        assert!(input.handle_key(&key(KeyCode::Home)));
        assert!(input.handle_key(&key(KeyCode::Char('O'))));
        assert_eq!(input.value(), "OMilk");
        assert!(input.handle_key(&key(KeyCode::End)));
        assert!(input.handle_key(&key(KeyCode::Backspace)));
        assert_eq!(input.value(), "OMil");
        assert!(!input.handle_key(&key(KeyCode::Tab)));

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(input.handle_key(&ctrl_u));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_reset_clears_and_blurs() {
        let mut input = typed("Tea");
        input.reset();
        assert_eq!(input.value(), "");
        assert!(!input.is_focused());
        assert_eq!(input.view(), PLACEHOLDER);
        assert_eq!(input.display_text(), PLACEHOLDER);
    }
}
