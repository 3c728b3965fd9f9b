//! The roster table: one line per record on the current page, with
//! per-row action buttons and an inline editor for the row being edited.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::button::draw_button;
use super::form_panel::choice_text;
use super::text_input::TextInputState;
use super::theme::{
    ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, BORDER_FOCUSED, INPUT_BG,
    SELECTED_BG, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::draft::{Field, ValidationError};
use crate::model::{GenderOptions, Record, RecordId};

pub const EMPTY_TABLE_TEXT: &str = "No records found";

const EDIT_LABEL: &str = "[Edit]";
const SAVE_LABEL: &str = "[Save]";
const DELETE_LABEL: &str = "[Delete]";

/// A row button that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowButton {
    Edit(RecordId),
    Save(RecordId),
    Delete(RecordId),
}

/// Hit areas of one rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRegions {
    pub id: RecordId,
    /// Index of the row within the page
    pub index: usize,
    pub row: Rect,
    pub edit_button: Option<Rect>,
    pub save_button: Option<Rect>,
    pub delete_button: Option<Rect>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRegions {
    pub rows: Vec<RowRegions>,
    /// Bounds of the row being edited and its cells, when on screen
    pub edit_row: Option<(Rect, Vec<(Field, Rect)>)>,
    pub cursor: Option<Position>,
}

impl TableRegions {
    pub fn row_at(&self, x: u16, y: u16) -> Option<&RowRegions> {
        let point = Position::new(x, y);
        self.rows.iter().find(|r| r.row.contains(point))
    }

    pub fn button_at(&self, x: u16, y: u16) -> Option<RowButton> {
        let point = Position::new(x, y);
        let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(point));
        self.rows.iter().find_map(|r| {
            if hit(r.edit_button) {
                Some(RowButton::Edit(r.id))
            } else if hit(r.save_button) {
                Some(RowButton::Save(r.id))
            } else if hit(r.delete_button) {
                Some(RowButton::Delete(r.id))
            } else {
                None
            }
        })
    }
}

/// Staged values of the row being edited.
pub struct EditRow<'a> {
    pub id: RecordId,
    pub focus: Field,
    pub name: &'a TextInputState,
    pub age: &'a TextInputState,
    pub gender: &'a str,
    pub error: Option<&'a ValidationError>,
}

pub struct RosterTable<'a> {
    pub records: &'a [&'a Record],
    pub genders: &'a GenderOptions,
    pub selected: Option<usize>,
    /// Table or inline editor has keyboard focus
    pub focused: bool,
    pub editing: Option<EditRow<'a>>,
}

fn columns(row: Rect) -> [Rect; 4] {
    Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(18),
    ])
    .spacing(1)
    .areas(row)
}

fn overflow_text(above: usize, below: usize) -> String {
    match (above, below) {
        (0, below) => format!(" +{below} more"),
        (above, 0) => format!(" {above} above"),
        (above, below) => format!(" {above} above, +{below} more"),
    }
}

impl RosterTable<'_> {
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> TableRegions {
        let border = if self.focused {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let mut block = Block::default()
            .title(" Students ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        if let Some(error) = self.editing.as_ref().and_then(|e| e.error) {
            block = block.title_bottom(
                Line::styled(format!(" {} ", error), Style::default().fg(ACCENT_ERROR)),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let mut regions = TableRegions::default();
        if inner.height == 0 || inner.width == 0 {
            return regions;
        }

        let header = Rect::new(inner.x, inner.y, inner.width, 1);
        let header_style = Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD);
        for (rect, title) in columns(header).into_iter().zip(["Name", "Gender", "Age", "Actions"]) {
            buf.set_stringn(rect.x, rect.y, title, rect.width as usize, header_style);
        }

        if self.records.is_empty() {
            if inner.height > 1 {
                let body = Rect::new(inner.x, inner.y + 1, inner.width, 1);
                Paragraph::new(EMPTY_TABLE_TEXT)
                    .style(Style::default().fg(TEXT_MUTED))
                    .centered()
                    .render(body, buf);
            }
            return regions;
        }

        let rows = (inner.height - 1) as usize;
        let (offset, window) = self.scroll_window(rows);
        let hidden_below = self.records.len().saturating_sub(offset + window);
        if window < rows && (offset > 0 || hidden_below > 0) {
            let line = Rect::new(inner.x, inner.y + 1 + window as u16, inner.width, 1);
            Paragraph::new(overflow_text(offset, hidden_below))
                .style(Style::default().fg(TEXT_MUTED))
                .render(line, buf);
        }

        for (index, record) in self.records.iter().enumerate().skip(offset).take(window) {
            let row = Rect::new(inner.x, inner.y + 1 + (index - offset) as u16, inner.width, 1);
            let selected = self.selected == Some(index);
            if selected {
                buf.set_style(row, Style::default().bg(SELECTED_BG));
            }

            let [name_col, gender_col, age_col, actions_col] = columns(row);
            let edit = self.editing.as_ref().filter(|e| e.id == record.id);

            let mut row_regions = RowRegions {
                id: record.id,
                index,
                row,
                edit_button: None,
                save_button: None,
                delete_button: None,
            };

            let mut x = actions_col.x;
            match edit {
                Some(edit) => {
                    self.render_edit_cells(edit, [name_col, gender_col, age_col], buf, &mut regions);
                    regions.edit_row = Some((
                        row,
                        vec![
                            (Field::Name, name_col),
                            (Field::Gender, gender_col),
                            (Field::Age, age_col),
                        ],
                    ));
                    row_regions.save_button = draw_button(
                        buf,
                        x,
                        row.y,
                        SAVE_LABEL,
                        Style::default().fg(ACCENT_SUCCESS),
                        actions_col.right(),
                    );
                    x += SAVE_LABEL.len() as u16 + 1;
                }
                None => {
                    let text = Style::default().fg(if selected { TEXT_PRIMARY } else { TEXT_SECONDARY });
                    buf.set_stringn(name_col.x, row.y, &record.name, name_col.width as usize, text);
                    buf.set_stringn(
                        gender_col.x,
                        row.y,
                        self.genders.label_for(&record.gender),
                        gender_col.width as usize,
                        text,
                    );
                    buf.set_stringn(
                        age_col.x,
                        row.y,
                        record.age.to_string(),
                        age_col.width as usize,
                        text,
                    );
                    row_regions.edit_button = draw_button(
                        buf,
                        x,
                        row.y,
                        EDIT_LABEL,
                        Style::default().fg(ACCENT_PRIMARY),
                        actions_col.right(),
                    );
                    x += EDIT_LABEL.len() as u16 + 1;
                }
            }
            row_regions.delete_button = draw_button(
                buf,
                x,
                row.y,
                DELETE_LABEL,
                Style::default().fg(ACCENT_ERROR),
                actions_col.right(),
            );

            regions.rows.push(row_regions);
        }

        regions
    }

    /// First page index to draw and how many rows fit in `rows` lines.
    /// When the page overflows, one line goes to the overflow note and the
    /// window follows the edited row, or the selected one.
    fn scroll_window(&self, rows: usize) -> (usize, usize) {
        let total = self.records.len();
        if total <= rows {
            return (0, total);
        }
        let window = if rows >= 2 { rows - 1 } else { rows };
        if window == 0 {
            return (0, 0);
        }
        let anchor = self
            .editing
            .as_ref()
            .and_then(|edit| self.records.iter().position(|r| r.id == edit.id))
            .or(self.selected)
            .unwrap_or(0)
            .min(total - 1);
        let offset = (anchor + 1).saturating_sub(window);
        (offset, window)
    }

    fn render_edit_cells(
        &self,
        edit: &EditRow<'_>,
        [name_col, gender_col, age_col]: [Rect; 3],
        buf: &mut Buffer,
        regions: &mut TableRegions,
    ) {
        let input = Style::default().fg(TEXT_PRIMARY).bg(INPUT_BG);
        let active = self.focused;

        let name_cursor = edit
            .name
            .render(name_col, buf, input, None, active && edit.focus == Field::Name);
        let age_cursor = edit
            .age
            .render(age_col, buf, input, None, active && edit.focus == Field::Age);

        let label = (!edit.gender.is_empty()).then(|| self.genders.label_for(edit.gender));
        let mut choice = input;
        if active && edit.focus == Field::Gender {
            choice = choice.fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD);
        }
        Paragraph::new(choice_text(label))
            .style(choice)
            .render(gender_col, buf);

        regions.cursor = name_cursor.or(age_cursor);
    }
}
