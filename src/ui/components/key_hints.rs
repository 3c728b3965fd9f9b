//! Footer key hint rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{FOOTER_BG, KEY_HINT_BG, TEXT_MUTED, TEXT_SECONDARY};

const HINT_GAP: &str = "   ";

/// Render `key action` pairs on one line. Hints that would not fit whole
/// are left off rather than cut. Returns how many were drawn.
pub fn render_key_hints<K, A>(area: Rect, buf: &mut Buffer, hints: &[(K, A)]) -> usize
where
    K: AsRef<str>,
    A: AsRef<str>,
{
    let key_style = Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG);
    let action_style = Style::default().fg(TEXT_MUTED);

    let mut spans = vec![Span::raw(" ")];
    let mut used = 1usize;
    let mut drawn = 0;

    for (key, action) in hints {
        let key_text = format!(" {} ", key.as_ref());
        let action_text = format!(" {}", action.as_ref());
        let gap = if drawn > 0 { HINT_GAP.len() } else { 0 };
        let width = gap + key_text.width() + action_text.width();
        if used + width > area.width as usize {
            break;
        }
        if gap > 0 {
            spans.push(Span::raw(HINT_GAP));
        }
        spans.push(Span::styled(key_text, key_style));
        spans.push(Span::styled(action_text, action_style));
        used += width;
        drawn += 1;
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(FOOTER_BG))
        .render(area, buf);
    drawn
}
