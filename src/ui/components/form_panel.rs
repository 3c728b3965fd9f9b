//! The add-record form: name, gender choice, age and an Add button.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::button::draw_button;
use super::text_input::TextInputState;
use super::theme::{
    ACCENT_ERROR, ACCENT_PRIMARY, BORDER_DEFAULT, BORDER_FOCUSED, INPUT_BG, TEXT_FAINT,
    TEXT_MUTED, TEXT_PRIMARY,
};
use crate::draft::{Field, FieldErrors};

/// Rows the form occupies, borders included.
pub const FORM_HEIGHT: u16 = 4;

pub const ADD_BUTTON_LABEL: &str = "[ Add ]";

/// Where the form's clickable parts were drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRegions {
    pub fields: Vec<(Field, Rect)>,
    pub add_button: Option<Rect>,
    pub cursor: Option<Position>,
}

impl FormRegions {
    pub fn field_at(&self, x: u16, y: u16) -> Option<Field> {
        let point = Position::new(x, y);
        self.fields
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(field, _)| *field)
    }
}

/// Render `< label >` for a choice field.
pub fn choice_text(label: Option<&str>) -> String {
    match label {
        Some(label) => format!("< {} >", label),
        None => "< select >".to_string(),
    }
}

pub struct FormPanel<'a> {
    pub name: &'a TextInputState,
    pub age: &'a TextInputState,
    /// Display label of the chosen gender, if any
    pub gender_label: Option<&'a str>,
    /// Focused field, `None` when the form does not have focus
    pub focus: Option<Field>,
    pub errors: &'a FieldErrors,
}

impl FormPanel<'_> {
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> FormRegions {
        let border = if self.focus.is_some() {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let block = Block::default()
            .title(" Add Student ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut regions = FormRegions::default();
        if inner.height == 0 {
            return regions;
        }

        let fields_row = Rect::new(inner.x, inner.y, inner.width, 1);
        let [name_label, name_area, gender_label, gender_area, age_label, age_area, _, button_area] =
            Layout::horizontal([
                Constraint::Length(6),
                Constraint::Fill(1),
                Constraint::Length(9),
                Constraint::Length(12),
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(ADD_BUTTON_LABEL.len() as u16),
            ])
            .areas(fields_row);

        let label_style = Style::default().fg(TEXT_MUTED);
        Paragraph::new(" Name").style(label_style).render(name_label, buf);
        Paragraph::new(" Gender").style(label_style).render(gender_label, buf);
        Paragraph::new(" Age").style(label_style).render(age_label, buf);

        let input_style = Style::default().fg(TEXT_PRIMARY).bg(INPUT_BG);
        let placeholder = Style::default().fg(TEXT_FAINT).bg(INPUT_BG);

        let name_cursor = self.name.render(
            name_area,
            buf,
            input_style,
            Some(("Name", placeholder)),
            self.focus == Some(Field::Name),
        );
        let age_cursor = self.age.render(
            age_area,
            buf,
            input_style,
            Some(("Age", placeholder)),
            self.focus == Some(Field::Age),
        );

        let mut choice_style = match self.gender_label {
            Some(_) => input_style,
            None => placeholder,
        };
        if self.focus == Some(Field::Gender) {
            choice_style = choice_style.fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD);
        }
        Paragraph::new(choice_text(self.gender_label))
            .style(choice_style)
            .render(gender_area, buf);

        regions.add_button = draw_button(
            buf,
            button_area.x,
            button_area.y,
            ADD_BUTTON_LABEL,
            Style::default().fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD),
            button_area.right(),
        );
        regions.fields = vec![
            (Field::Name, name_area),
            (Field::Gender, gender_area),
            (Field::Age, age_area),
        ];
        regions.cursor = name_cursor.or(age_cursor);

        if inner.height > 1 && !self.errors.is_empty() {
            let errors_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            let spans: Vec<Span> = self
                .errors
                .iter()
                .map(|(_, err)| Span::styled(format!(" {} ", err), Style::default().fg(ACCENT_ERROR)))
                .collect();
            Paragraph::new(Line::from(spans)).render(errors_row, buf);
        }

        regions
    }
}
