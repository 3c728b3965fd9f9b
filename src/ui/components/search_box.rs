use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
};

use super::text_input::TextInputState;
use super::theme::{BORDER_DEFAULT, BORDER_FOCUSED, TEXT_FAINT, TEXT_PRIMARY};

pub const SEARCH_HEIGHT: u16 = 3;

/// The name filter above the table.
pub struct SearchBox<'a> {
    pub input: &'a TextInputState,
    pub focused: bool,
}

impl SearchBox<'_> {
    /// Returns the input area and, when focused, the cursor position.
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> (Rect, Option<Position>) {
        let border = if self.focused {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = self.input.render(
            inner,
            buf,
            Style::default().fg(TEXT_PRIMARY),
            Some(("Search by name...", Style::default().fg(TEXT_FAINT))),
            self.focused,
        );
        (inner, cursor)
    }
}
