//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the app into an off-screen buffer and reads text back out of it,
//! including the screen position of a label so tests can click on it.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use roster::App;

/// Standard test screen size
pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of `app` and return the rendered buffer.
pub fn render_app(app: &mut App) -> Buffer {
    render_app_sized(app, WIDTH, HEIGHT)
}

pub fn render_app_sized(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw frame");
    terminal.backend().buffer().clone()
}

/// One string per buffer row, trailing spaces removed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Check if the buffer contains a string on any single row
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_lines(buffer).iter().any(|line| line.contains(text))
}

/// Screen position of the first cell of the first occurrence of `text`.
/// Labels are ASCII, so char index equals column.
pub fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    buffer_lines(buffer).iter().enumerate().find_map(|(y, line)| {
        line.find(text).map(|byte| {
            let column = line[..byte].chars().count();
            (buffer.area.x + column as u16, buffer.area.y + y as u16)
        })
    })
}

/// Row index of every line containing `text`.
pub fn rows_containing(buffer: &Buffer, text: &str) -> Vec<u16> {
    buffer_lines(buffer)
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(text))
        .map(|(y, _)| y as u16)
        .collect()
}

/// Assert that the buffer contains expected text, printing the screen if not
pub fn assert_buffer_contains(buffer: &Buffer, expected: &str) {
    assert!(
        buffer_contains(buffer, expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        buffer_lines(buffer).join("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_find_text_reports_column_and_row() {
        let mut terminal = create_test_terminal_sized(20, 3);
        terminal
            .draw(|f| f.render_widget(Paragraph::new("\n  [Edit]"), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(find_text(buffer, "[Edit]"), Some((2, 1)));
        assert_eq!(find_text(buffer, "missing"), None);
        assert_eq!(rows_containing(buffer, "Edit"), vec![1]);
    }
}
