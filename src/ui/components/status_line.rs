use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_ERROR, ACCENT_SUCCESS, STATUS_BAR_BG, TEXT_SECONDARY};

/// Ticks a status message stays on screen.
pub const STATUS_TTL_TICKS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A transient message shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    ttl: u32,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            ttl: STATUS_TTL_TICKS,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    /// Count down one tick; returns false once the message has expired.
    pub fn tick(&mut self) -> bool {
        self.ttl = self.ttl.saturating_sub(1);
        self.ttl > 0
    }
}

pub struct StatusLine<'a> {
    message: Option<&'a StatusMessage>,
}

impl<'a> StatusLine<'a> {
    pub fn new(message: Option<&'a StatusMessage>) -> Self {
        Self { message }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.message {
            Some(msg) => {
                let color = match msg.kind {
                    StatusKind::Info => TEXT_SECONDARY,
                    StatusKind::Success => ACCENT_SUCCESS,
                    StatusKind::Error => ACCENT_ERROR,
                };
                Line::from(Span::styled(format!(" {}", msg.text), Style::default().fg(color)))
            }
            None => Line::default(),
        };

        Paragraph::new(line)
            .style(Style::default().bg(STATUS_BAR_BG))
            .render(area, buf);
    }
}
