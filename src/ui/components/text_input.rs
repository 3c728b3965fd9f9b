//! Reusable single-line text input state with cursor management

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line text input. The cursor is a char index, not a byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.input.remove(at);
    }

    /// Delete character at cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Delete from cursor to end of line (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.input.truncate(at);
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.input.chars().collect();
        let end = self.cursor;
        let mut start = end;
        while start > 0 && chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && chars[start - 1] != ' ' {
            start -= 1;
        }
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.input.drain(from..to);
        self.cursor = start;
    }

    /// Display column of the cursor relative to the start of the text.
    pub fn cursor_column(&self) -> u16 {
        let before = &self.input[..self.byte_offset(self.cursor)];
        before.width() as u16
    }

    /// Render the text (or a placeholder when empty). When `focused`, the
    /// cell under the cursor is highlighted and its position returned so
    /// the caller can place the terminal cursor.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: Option<(&str, Style)>,
        focused: bool,
    ) -> Option<Position> {
        if area.width == 0 || area.height == 0 {
            return None;
        }

        let column = self.cursor_column();
        let scroll = column.saturating_sub(area.width.saturating_sub(1));

        match (self.input.is_empty(), placeholder) {
            (true, Some((text, placeholder_style))) => {
                Paragraph::new(Span::styled(text, placeholder_style))
                    .style(style)
                    .render(area, buf);
            }
            _ => {
                Paragraph::new(self.input.as_str())
                    .style(style)
                    .scroll((0, scroll))
                    .render(area, buf);
            }
        }

        if !focused {
            return None;
        }
        let position = Position::new(area.x + column - scroll, area.y);
        buf[(position.x, position.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        Some(position)
    }
}

impl std::fmt::Display for TextInputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
