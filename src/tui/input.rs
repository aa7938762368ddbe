//! Input handling for the delay field

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key while the delay field is focused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Key consumed, nothing else to do
    None,
    /// Apply the typed delay
    Submit(String),
    /// Leave the field without applying
    Cancel,
    /// Quit the application
    Quit,
}

/// Editable text of the delay field
///
/// Note: `cursor` is a CHARACTER index, not a byte index.
/// The raw text is kept as typed; validation happens on submit.
#[derive(Debug, Clone)]
pub struct DelayInput {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position in buffer (character index, not byte index!)
    pub cursor: usize,
    /// Whether the field has keyboard focus
    pub focused: bool,
}

impl DelayInput {
    pub fn new(delay: Duration) -> Self {
        let buffer = delay.as_millis().to_string();
        let cursor = buffer.chars().count();
        Self {
            buffer,
            cursor,
            focused: false,
        }
    }

    /// Focus the field with the cursor at the end
    pub fn focus(&mut self) {
        self.focused = true;
        self.cursor = self.char_count();
    }

    /// Drop focus and show `delay` again
    pub fn blur(&mut self, delay: Duration) {
        self.focused = false;
        self.buffer = delay.as_millis().to_string();
        self.cursor = self.char_count();
    }

    /// Get the number of characters in the buffer
    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.buffer.len())
    }

    /// Insert a character at the current cursor position (character index)
    fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    fn remove_char_before_cursor(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_char_at_cursor();
        }
    }

    /// Remove the character at the cursor position
    fn remove_char_at_cursor(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            if let Some(ch) = self.buffer[byte_idx..].chars().next() {
                self.buffer.replace_range(byte_idx..byte_idx + ch.len_utf8(), "");
            }
        }
    }

    /// Handle a key event while focused
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => InputAction::Quit,
            KeyCode::Char('u') if ctrl => {
                self.buffer.clear();
                self.cursor = 0;
                InputAction::None
            }
            KeyCode::Enter => InputAction::Submit(self.buffer.clone()),
            KeyCode::Esc | KeyCode::Tab => InputAction::Cancel,
            KeyCode::Backspace => {
                self.remove_char_before_cursor();
                InputAction::None
            }
            KeyCode::Delete => {
                self.remove_char_at_cursor();
                InputAction::None
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                InputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputAction::None
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                InputAction::None
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                InputAction::None
            }
            _ => InputAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_with_current_delay() {
        let input = DelayInput::new(Duration::from_millis(700));
        assert_eq!(input.buffer, "700");
        assert_eq!(input.cursor, 3);
        assert!(!input.focused);
    }

    #[test]
    fn test_edit_and_submit() {
        let mut input = DelayInput::new(Duration::from_millis(700));
        input.focus();
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Char('5')));
        input.handle_key(key(KeyCode::Char('0')));
        assert_eq!(input.handle_key(key(KeyCode::Enter)), InputAction::Submit("750".into()));
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = DelayInput::new(Duration::from_millis(700));
        input.focus();
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Char('1')));
        assert_eq!(input.buffer, "1700");
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.buffer, "100");
        input.handle_key(key(KeyCode::End));
        input.handle_key(key(KeyCode::Right));
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_raw_text_is_kept() {
        let mut input = DelayInput::new(Duration::from_millis(700));
        input.buffer.clear();
        input.cursor = 0;
        input.insert_char('-');
        input.insert_char('\u{4f60}');
        assert_eq!(input.buffer, "-\u{4f60}");
        input.remove_char_before_cursor();
        assert_eq!(input.buffer, "-");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_blur_restores_delay() {
        let mut input = DelayInput::new(Duration::from_millis(700));
        input.focus();
        input.handle_key(key(KeyCode::Char('x')));
        assert_eq!(input.handle_key(key(KeyCode::Esc)), InputAction::Cancel);
        input.blur(Duration::from_millis(700));
        assert_eq!(input.buffer, "700");
        assert!(!input.focused);
    }
}
