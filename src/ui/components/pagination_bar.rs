use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::button::draw_button;
use super::theme::{ACCENT_PRIMARY, ACCENT_SUCCESS, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

const PREV_LABEL: &str = "< Prev";
const NEXT_LABEL: &str = "Next >";
pub const EXPORT_LABEL: &str = "[ Export CSV ]";

/// Something in the pagination bar that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerHit {
    Prev,
    Next,
    Page(usize),
    Export,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerRegions {
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub pages: Vec<(usize, Rect)>,
    pub export: Option<Rect>,
}

impl PagerRegions {
    pub fn hit(&self, x: u16, y: u16) -> Option<PagerHit> {
        let point = Position::new(x, y);
        let inside = |rect: &Option<Rect>| rect.is_some_and(|r| r.contains(point));
        if inside(&self.prev) {
            return Some(PagerHit::Prev);
        }
        if inside(&self.next) {
            return Some(PagerHit::Next);
        }
        if inside(&self.export) {
            return Some(PagerHit::Export);
        }
        self.pages
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(page, _)| PagerHit::Page(*page))
    }
}

/// Prev/next controls, one button per page, and the export button.
pub struct PaginationBar {
    pub current_page: usize,
    pub page_count: usize,
}

impl PaginationBar {
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> PagerRegions {
        let mut regions = PagerRegions::default();
        if area.height == 0 {
            return regions;
        }

        let y = area.y;
        let export_width = EXPORT_LABEL.width() as u16;
        let export_x = area.right().saturating_sub(export_width);
        let limit = export_x.saturating_sub(1).max(area.x);

        let enabled = Style::default().fg(ACCENT_PRIMARY);
        let disabled = Style::default().fg(TEXT_FAINT);

        let mut x = area.x + 1;
        let prev_style = if self.current_page > 1 { enabled } else { disabled };
        regions.prev = draw_button(buf, x, y, PREV_LABEL, prev_style, limit);
        x += PREV_LABEL.width() as u16 + 2;

        for page in 1..=self.page_count {
            let label = format!(" {} ", page);
            let style = if page == self.current_page {
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            match draw_button(buf, x, y, &label, style, limit) {
                Some(rect) => regions.pages.push((page, rect)),
                None => {
                    buf.set_string(x, y, "…", Style::default().fg(TEXT_MUTED));
                    x += 2;
                    break;
                }
            }
            x += label.width() as u16 + 1;
        }

        let next_style = if self.current_page < self.page_count {
            enabled
        } else {
            disabled
        };
        regions.next = draw_button(buf, x + 1, y, NEXT_LABEL, next_style, limit);

        regions.export = draw_button(
            buf,
            export_x,
            y,
            EXPORT_LABEL,
            Style::default().fg(ACCENT_SUCCESS).add_modifier(Modifier::BOLD),
            area.right(),
        );

        regions
    }
}
