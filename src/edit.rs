//! Inline editing session for a single roster record.
//!
//! A session exists exactly while one record is in edit mode. It owns the
//! staged text of each cell, the focus handle, and the row bounds used to
//! detect presses outside the row. Dropping the session releases all of it.

use ratatui::layout::{Position, Rect};

use crate::draft::{Field, ValidationError};
use crate::model::{GenderOptions, Record, RecordId};

/// Where a pointer press landed relative to the edited row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    /// Inside an editable cell.
    Cell(Field),
    /// Inside the row but not on an editable cell.
    Row,
    /// Outside the row, or the row is not currently on screen.
    Outside,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    id: RecordId,
    focus: Field,
    name: String,
    gender: String,
    age: String,
    /// Last rejected commit, shown next to the row.
    error: Option<ValidationError>,
    row_bounds: Option<Rect>,
    cell_bounds: Vec<(Field, Rect)>,
}

impl EditSession {
    /// Start editing `record` with focus on its first editable field.
    pub fn begin(record: &Record) -> Self {
        Self {
            id: record.id,
            focus: Field::Name,
            name: record.name.clone(),
            gender: record.gender.clone(),
            age: record.age.to_string(),
            error: None,
            row_bounds: None,
            cell_bounds: Vec::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn staged(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Age => &self.age,
        }
    }

    /// Replace the staged text of a cell without committing it.
    pub fn stage(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Gender => self.gender = value,
            Field::Age => self.age = value,
        }
        if self.error.as_ref().map(|e| e.field()) == Some(field) {
            self.error = None;
        }
    }

    /// Step the staged gender through the configured options.
    pub fn cycle_gender(&mut self, genders: &GenderOptions, forward: bool) {
        let next = if forward {
            genders.next_after(&self.gender)
        } else {
            genders.prev_before(&self.gender)
        };
        self.gender = next.to_string();
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub(crate) fn set_error(&mut self, error: Option<ValidationError>) {
        self.error = error;
    }

    /// Record where the row was drawn this frame. `None` means the row is
    /// not visible, so every press counts as outside.
    pub fn set_bounds(&mut self, row: Option<Rect>, cells: Vec<(Field, Rect)>) {
        self.row_bounds = row;
        self.cell_bounds = cells;
    }

    pub fn row_bounds(&self) -> Option<Rect> {
        self.row_bounds
    }

    pub fn hit_test(&self, x: u16, y: u16) -> RowHit {
        let point = Position::new(x, y);
        let Some(row) = self.row_bounds else {
            return RowHit::Outside;
        };
        if !row.contains(point) {
            return RowHit::Outside;
        }
        self.cell_bounds
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(field, _)| RowHit::Cell(*field))
            .unwrap_or(RowHit::Row)
    }
}
