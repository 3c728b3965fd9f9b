use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

/// Draw a one-line clickable label at `(x, y)` and return its hit area.
/// Returns `None` when the label does not fit before `limit`.
pub fn draw_button(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    label: &str,
    style: Style,
    limit: u16,
) -> Option<Rect> {
    let width = label.width() as u16;
    if width == 0 || x.saturating_add(width) > limit {
        return None;
    }
    buf.set_string(x, y, label, style);
    Some(Rect::new(x, y, width, 1))
}
