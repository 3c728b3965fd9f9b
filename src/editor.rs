//! The roster editor session controller.
//!
//! `RosterEditor` owns the roster together with the add-record draft and the
//! view state (search term, current page, inline edit session). All state
//! changes go through the named operations below; the TUI only reads the
//! results and forwards user intent.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use ratatui::layout::Rect;

use crate::draft::{
    validate_age, validate_gender, validate_name, Field, FieldErrors, FormDraft, ValidationError,
};
use crate::edit::{EditSession, RowHit};
use crate::export::{self, ExportError, ExportSummary};
use crate::model::{GenderOptions, Record, RecordId};
use crate::view::{self, ViewState, DEFAULT_PAGE_SIZE};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),
    #[error("Page {page} is out of range (1..={pages})")]
    PageOutOfRange { page: usize, pages: usize },
    #[error("No record is being edited")]
    NotEditing,
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl From<ValidationError> for EditorError {
    fn from(err: ValidationError) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(err);
        EditorError::Validation(errors)
    }
}

/// Tunables for an editor session.
#[derive(Debug, Clone)]
pub struct EditorSettings {
    pub page_size: usize,
    pub genders: GenderOptions,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            genders: GenderOptions::default(),
        }
    }
}

/// Result of routing a pointer press to the active edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No record was being edited.
    Idle,
    /// The press landed on a cell of the edited row, which now has focus.
    Focused(Field),
    /// The press landed on a cell but the previously focused value was
    /// rejected, so focus stayed where it was.
    FocusRejected(ValidationError),
    /// The press landed inside the row but not on an editable cell.
    InsideRow,
    /// The press landed outside the row and editing ended. Carries the
    /// error if the focused value could not be committed on the way out.
    Exited { rejected: Option<ValidationError> },
}

#[derive(Debug, Clone)]
pub struct RosterEditor {
    records: Vec<Record>,
    draft: FormDraft,
    view: ViewState,
    genders: GenderOptions,
    page_size: usize,
}

impl Default for RosterEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl RosterEditor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            records: Vec::new(),
            draft: FormDraft::new(),
            view: ViewState::default(),
            genders: settings.genders,
            page_size: settings.page_size.max(1),
        }
    }

    // ========== Roster ==========

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn genders(&self) -> &GenderOptions {
        &self.genders
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // ========== Add ==========

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn update_draft(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn cycle_draft_gender(&mut self, forward: bool) {
        let current = self.draft.value(Field::Gender);
        let next = if forward {
            self.genders.next_after(current)
        } else {
            self.genders.prev_before(current)
        }
        .to_string();
        self.draft.set_field(Field::Gender, next);
    }

    /// Validate the draft and append a new record on success.
    ///
    /// On failure the roster is untouched and the draft carries the errors.
    pub fn add(&mut self) -> Result<RecordId, EditorError> {
        match self.draft.validate(&self.genders) {
            Ok(new) => {
                let id = RecordId::generate();
                self.records.push(Record::from_new(id, new));
                self.draft.reset();
                tracing::debug!(record_id = %id, total = self.records.len(), "Added record");
                Ok(id)
            }
            Err(errors) => {
                tracing::debug!(errors = %errors, "Rejected new record");
                self.draft.set_errors(errors.clone());
                Err(EditorError::Validation(errors))
            }
        }
    }

    /// Fill the draft with the given values and submit it.
    pub fn add_values(
        &mut self,
        name: &str,
        gender: &str,
        age: &str,
    ) -> Result<RecordId, EditorError> {
        self.draft.set_field(Field::Name, name);
        self.draft.set_field(Field::Gender, gender);
        self.draft.set_field(Field::Age, age);
        self.add()
    }

    // ========== Search ==========

    pub fn search_term(&self) -> &str {
        &self.view.search_term
    }

    /// Replace the search term. Always returns to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
        self.view.current_page = 1;
    }

    /// Records whose name matches the search term, in roster order.
    pub fn filtered(&self) -> Vec<&Record> {
        view::filter_records(&self.records, &self.view.search_term)
    }

    // ========== Pagination ==========

    pub fn current_page(&self) -> usize {
        self.view.current_page
    }

    pub fn page_count(&self) -> usize {
        view::page_count(self.filtered().len(), self.page_size)
    }

    /// The filtered records on the current page.
    pub fn page_view(&self) -> Vec<&Record> {
        let filtered = self.filtered();
        view::page_slice(&filtered, self.view.current_page, self.page_size).to_vec()
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<(), EditorError> {
        let pages = self.page_count().max(1);
        if page == 0 || page > pages {
            return Err(EditorError::PageOutOfRange { page, pages });
        }
        self.view.current_page = page;
        Ok(())
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.view.current_page + 1).is_ok()
    }

    pub fn prev_page(&mut self) -> bool {
        self.view.current_page > 1 && self.go_to_page(self.view.current_page - 1).is_ok()
    }

    fn clamp_current_page(&mut self) {
        let len = self.filtered().len();
        self.view.current_page = view::clamp_page(self.view.current_page, len, self.page_size);
    }

    // ========== Inline edit ==========

    pub fn editing_id(&self) -> Option<RecordId> {
        self.view.editing.as_ref().map(|s| s.id())
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.view.editing.as_ref()
    }

    /// Put `id` into edit mode, ending any session on another record first.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<(), EditorError> {
        self.reconcile_editing();
        if self.editing_id() == Some(id) {
            return Ok(());
        }
        if self.record(id).is_none() {
            return Err(EditorError::RecordNotFound(id));
        }
        if self.view.editing.is_some() {
            self.leave_edit();
        }
        let record = self.record(id).ok_or(EditorError::RecordNotFound(id))?;
        self.view.editing = Some(EditSession::begin(record));
        tracing::debug!(record_id = %id, "Editing started");
        Ok(())
    }

    /// Stage text for a cell of the edited row without committing it.
    pub fn stage_edit(&mut self, field: Field, value: impl Into<String>) {
        if let Some(session) = self.view.editing.as_mut() {
            session.stage(field, value);
        }
    }

    pub fn cycle_edit_gender(&mut self, forward: bool) {
        if let Some(session) = self.view.editing.as_mut() {
            session.cycle_gender(&self.genders, forward);
        }
    }

    /// Write one field of `id` to the roster.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is not the
    /// record currently being edited.
    pub fn commit_field(
        &mut self,
        id: RecordId,
        field: Field,
        raw: &str,
    ) -> Result<bool, EditorError> {
        self.reconcile_editing();
        if self.editing_id() != Some(id) {
            tracing::debug!(record_id = %id, field = field.key(), "Ignored stale edit commit");
            return Ok(false);
        }

        let genders = &self.genders;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(EditorError::RecordNotFound(id))?;

        let applied = match field {
            Field::Name => validate_name(raw).map(|name| record.name = name),
            Field::Gender => validate_gender(raw, genders).map(|gender| record.gender = gender),
            Field::Age => validate_age(raw).map(|age| record.age = age),
        };
        let committed = match field {
            Field::Name => record.name.clone(),
            Field::Gender => record.gender.clone(),
            Field::Age => record.age.to_string(),
        };

        match applied {
            Ok(()) => {
                if let Some(session) = self.view.editing.as_mut() {
                    session.stage(field, committed);
                    session.set_error(None);
                }
                tracing::debug!(record_id = %id, field = field.key(), "Committed edit");
                if field == Field::Name {
                    if !self.filtered().iter().any(|r| r.id == id) {
                        tracing::debug!(record_id = %id, "Renamed record left the search results; editing ended");
                        self.view.editing = None;
                    }
                    self.clamp_current_page();
                }
                Ok(true)
            }
            Err(err) => {
                tracing::debug!(record_id = %id, field = field.key(), error = %err, "Rejected edit");
                if let Some(session) = self.view.editing.as_mut() {
                    session.set_error(Some(err.clone()));
                }
                Err(err.into())
            }
        }
    }

    /// Move focus within the edited row, committing the field losing focus.
    /// A rejected commit keeps focus on the offending field.
    pub fn focus_field(&mut self, field: Field) -> Result<(), EditorError> {
        self.reconcile_editing();
        let Some(session) = self.view.editing.as_ref() else {
            return Err(EditorError::NotEditing);
        };
        if session.focus() == field {
            return Ok(());
        }
        self.commit_focused()?;
        if let Some(session) = self.view.editing.as_mut() {
            session.set_focus(field);
        }
        Ok(())
    }

    /// Save: commit the focused field and leave edit mode. A rejected value
    /// keeps the session open.
    pub fn end_edit(&mut self) -> Result<(), EditorError> {
        self.reconcile_editing();
        if self.view.editing.is_none() {
            return Err(EditorError::NotEditing);
        }
        self.commit_focused()?;
        if let Some(session) = self.view.editing.take() {
            tracing::debug!(record_id = %session.id(), "Editing saved");
        }
        Ok(())
    }

    /// Leave edit mode unconditionally. The focused value is committed when
    /// valid; earlier commits are kept either way.
    pub fn leave_edit(&mut self) -> Option<ValidationError> {
        self.reconcile_editing();
        self.view.editing.as_ref()?;
        let rejected = match self.commit_focused() {
            Err(EditorError::Validation(errors)) => errors.iter().next().map(|(_, e)| e.clone()),
            _ => None,
        };
        if let Some(session) = self.view.editing.take() {
            tracing::debug!(record_id = %session.id(), "Editing ended");
        }
        rejected
    }

    /// Register where the edited row was drawn this frame.
    pub fn set_edit_bounds(&mut self, row: Option<Rect>, cells: Vec<(Field, Rect)>) {
        if let Some(session) = self.view.editing.as_mut() {
            session.set_bounds(row, cells);
        }
    }

    /// Route a pointer press to the edit session: presses outside the row
    /// end editing, presses on a cell move focus there.
    pub fn pointer_event(&mut self, x: u16, y: u16) -> PointerOutcome {
        self.reconcile_editing();
        let Some(session) = self.view.editing.as_ref() else {
            return PointerOutcome::Idle;
        };
        match session.hit_test(x, y) {
            RowHit::Cell(field) => match self.focus_field(field) {
                Ok(()) => PointerOutcome::Focused(field),
                Err(EditorError::Validation(errors)) => errors
                    .iter()
                    .next()
                    .map(|(_, e)| PointerOutcome::FocusRejected(e.clone()))
                    .unwrap_or(PointerOutcome::InsideRow),
                Err(_) => PointerOutcome::Idle,
            },
            RowHit::Row => PointerOutcome::InsideRow,
            RowHit::Outside => PointerOutcome::Exited {
                rejected: self.leave_edit(),
            },
        }
    }

    fn commit_focused(&mut self) -> Result<bool, EditorError> {
        let Some(session) = self.view.editing.as_ref() else {
            return Ok(false);
        };
        let (id, field) = (session.id(), session.focus());
        let staged = session.staged(field).to_string();
        self.commit_field(id, field, &staged)
    }

    /// Drop the edit session if its record no longer exists.
    fn reconcile_editing(&mut self) {
        let Some(id) = self.editing_id() else {
            return;
        };
        if !self.records.iter().any(|r| r.id == id) {
            tracing::debug!(record_id = %id, "Edited record disappeared; editing ended");
            self.view.editing = None;
        }
    }

    // ========== Delete ==========

    /// Remove a record. Removing the only record shown on a page past the
    /// first steps back one page.
    pub fn delete(&mut self, id: RecordId) -> Result<Record, EditorError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(EditorError::RecordNotFound(id))?;

        let page = self.page_view();
        let sole_on_page = page.len() == 1 && page[0].id == id;

        let removed = self.records.remove(index);
        if sole_on_page && self.view.current_page > 1 {
            self.view.current_page -= 1;
        }
        self.clamp_current_page();
        self.reconcile_editing();

        tracing::debug!(
            record_id = %id,
            page = self.view.current_page,
            total = self.records.len(),
            "Deleted record"
        );
        Ok(removed)
    }

    // ========== Export ==========

    /// Write the whole roster as CSV, ignoring search and pagination.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, EditorError> {
        Ok(export::write_csv(&self.records, writer)?)
    }

    /// Write `userdata_<timestamp>.csv` into `dir`.
    pub fn export_to_dir<Tz: TimeZone>(
        &self,
        dir: &Path,
        now: &DateTime<Tz>,
    ) -> Result<ExportSummary, EditorError>
    where
        Tz::Offset: std::fmt::Display,
    {
        Ok(export::export_to_dir(&self.records, dir, now)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(names: &[&str]) -> RosterEditor {
        let mut editor = RosterEditor::default();
        for name in names {
            editor.add_values(name, "female", "20").unwrap();
        }
        editor
    }

    fn ids(editor: &RosterEditor) -> Vec<RecordId> {
        editor.records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_add_appends_and_resets_draft() {
        let mut editor = RosterEditor::default();
        let id = editor.add_values("Alice", "female", "20").unwrap();

        assert_eq!(editor.len(), 1);
        let record = editor.record(id).unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.gender, "female");
        assert_eq!(record.age, 20);
        assert!(editor.draft().is_empty());
        assert!(editor.draft().errors().is_empty());
    }

    #[test]
    fn test_add_with_negative_age_is_rejected() {
        let mut editor = RosterEditor::default();
        let err = editor.add_values("Alice", "female", "-5").unwrap_err();

        assert!(matches!(err, EditorError::Validation(_)));
        assert!(editor.is_empty());
        assert_eq!(
            editor.draft().error(Field::Age).unwrap().to_string(),
            "Valid age is required"
        );
        // The draft keeps what the user typed.
        assert_eq!(editor.draft().value(Field::Name), "Alice");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let editor = editor_with(&["Carl", "Alice", "Bob"]);
        let names: Vec<&str> = editor.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Carl", "Alice", "Bob"]);
    }

    #[test]
    fn test_search_resets_page() {
        let mut editor = editor_with(&["a1", "a2", "a3", "a4", "a5", "a6", "a7"]);
        editor.go_to_page(3).unwrap();
        editor.set_search_term("a");
        assert_eq!(editor.current_page(), 1);

        editor.go_to_page(2).unwrap();
        editor.set_search_term("a");
        assert_eq!(editor.current_page(), 1);
    }

    #[test]
    fn test_pagination_slices_filtered_view() {
        let mut editor = editor_with(&["Ann", "Bob", "Anna", "Andy", "Cid", "Anya"]);
        editor.set_search_term("an");
        assert_eq!(editor.filtered().len(), 4);
        assert_eq!(editor.page_count(), 2);

        editor.go_to_page(2).unwrap();
        let names: Vec<&str> = editor.page_view().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Anya"]);
    }

    #[test]
    fn test_go_to_page_out_of_range() {
        let mut editor = editor_with(&["a", "b", "c", "d"]);
        assert!(matches!(
            editor.go_to_page(3),
            Err(EditorError::PageOutOfRange { page: 3, pages: 2 })
        ));
        assert!(editor.go_to_page(0).is_err());
        assert_eq!(editor.current_page(), 1);

        // An empty roster still has page 1.
        let mut empty = RosterEditor::default();
        assert!(empty.go_to_page(1).is_ok());
    }

    #[test]
    fn test_next_and_prev_page_stop_at_bounds() {
        let mut editor = editor_with(&["a", "b", "c", "d"]);
        assert!(!editor.prev_page());
        assert!(editor.next_page());
        assert_eq!(editor.current_page(), 2);
        assert!(!editor.next_page());
        assert!(editor.prev_page());
        assert_eq!(editor.current_page(), 1);
    }

    #[test]
    fn test_deleting_sole_record_on_last_page_steps_back() {
        let mut editor = editor_with(&["a", "b", "c", "d"]);
        editor.go_to_page(2).unwrap();
        let last = editor.page_view()[0].id;

        editor.delete(last).unwrap();
        assert_eq!(editor.current_page(), 1);
        assert_eq!(editor.len(), 3);
    }

    #[test]
    fn test_deleting_on_multi_record_page_keeps_page() {
        let mut editor = editor_with(&["a", "b", "c", "d", "e"]);
        editor.go_to_page(2).unwrap();
        let first_on_page = editor.page_view()[0].id;

        editor.delete(first_on_page).unwrap();
        assert_eq!(editor.current_page(), 2);
        assert_eq!(editor.page_view().len(), 1);
    }

    #[test]
    fn test_deleting_only_record_on_first_page_stays_on_first() {
        let mut editor = editor_with(&["a"]);
        let id = ids(&editor)[0];
        editor.delete(id).unwrap();
        assert_eq!(editor.current_page(), 1);
        assert!(editor.is_empty());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut editor = editor_with(&["a"]);
        let missing = RecordId::generate();
        assert!(matches!(
            editor.delete(missing),
            Err(EditorError::RecordNotFound(id)) if id == missing
        ));
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_begin_edit_focuses_name() {
        let mut editor = editor_with(&["Alice"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();

        assert_eq!(editor.editing_id(), Some(id));
        assert_eq!(editor.edit_session().unwrap().focus(), Field::Name);
    }

    #[test]
    fn test_begin_edit_unknown_record() {
        let mut editor = editor_with(&["Alice"]);
        assert!(editor.begin_edit(RecordId::generate()).is_err());
        assert!(editor.editing_id().is_none());
    }

    #[test]
    fn test_stale_commit_is_noop() {
        let mut editor = editor_with(&["Alice", "Bob"]);
        let all = ids(&editor);
        editor.begin_edit(all[0]).unwrap();

        assert!(!editor.commit_field(all[1], Field::Name, "Robert").unwrap());
        assert_eq!(editor.record(all[1]).unwrap().name, "Bob");

        // No session at all.
        editor.end_edit().unwrap();
        assert!(!editor.commit_field(all[0], Field::Name, "Alicia").unwrap());
        assert_eq!(editor.record(all[0]).unwrap().name, "Alice");
    }

    #[test]
    fn test_commit_applies_immediately() {
        let mut editor = editor_with(&["Alice"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();

        assert!(editor.commit_field(id, Field::Age, "33").unwrap());
        assert_eq!(editor.record(id).unwrap().age, 33);
        assert_eq!(editor.editing_id(), Some(id));
    }

    #[test]
    fn test_invalid_commit_leaves_record_unchanged() {
        let mut editor = editor_with(&["Alice"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();

        let err = editor.commit_field(id, Field::Age, "abc").unwrap_err();
        assert_eq!(err.to_string(), "Valid age is required");
        assert_eq!(editor.record(id).unwrap().age, 20);
        assert_eq!(
            editor.edit_session().unwrap().error(),
            Some(&ValidationError::InvalidAge)
        );
    }

    #[test]
    fn test_focus_change_commits_blurred_field() {
        let mut editor = editor_with(&["Alice"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();

        editor.stage_edit(Field::Name, "Alicia");
        editor.focus_field(Field::Age).unwrap();
        assert_eq!(editor.record(id).unwrap().name, "Alicia");
        assert_eq!(editor.edit_session().unwrap().focus(), Field::Age);
    }

    #[test]
    fn test_rejected_blur_keeps_focus() {
        let mut editor = editor_with(&["Alice"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();

        editor.stage_edit(Field::Name, "   ");
        assert!(editor.focus_field(Field::Age).is_err());
        assert_eq!(editor.edit_session().unwrap().focus(), Field::Name);
        assert_eq!(editor.record(id).unwrap().name, "Alice");
    }

    #[test]
    fn test_save_commits_and_exits() {
        let mut editor = editor_with(&["Alice"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();
        editor.focus_field(Field::Gender).unwrap();
        editor.cycle_edit_gender(true);
        editor.end_edit().unwrap();

        assert!(editor.editing_id().is_none());
        assert_eq!(editor.record(id).unwrap().gender, "male");
    }

    #[test]
    fn test_pointer_outside_keeps_committed_fields() {
        let mut editor = editor_with(&["Alice"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();
        editor.set_edit_bounds(
            Some(Rect::new(0, 10, 50, 1)),
            vec![
                (Field::Name, Rect::new(0, 10, 20, 1)),
                (Field::Gender, Rect::new(20, 10, 10, 1)),
                (Field::Age, Rect::new(30, 10, 5, 1)),
            ],
        );

        editor.stage_edit(Field::Name, "Alicia");
        assert_eq!(editor.pointer_event(31, 10), PointerOutcome::Focused(Field::Age));
        editor.stage_edit(Field::Age, "oops");

        let outcome = editor.pointer_event(5, 2);
        assert_eq!(
            outcome,
            PointerOutcome::Exited {
                rejected: Some(ValidationError::InvalidAge)
            }
        );
        assert!(editor.editing_id().is_none());
        let record = editor.record(id).unwrap();
        assert_eq!(record.name, "Alicia");
        assert_eq!(record.age, 20);
    }

    #[test]
    fn test_pointer_without_session_is_idle() {
        let mut editor = editor_with(&["Alice"]);
        assert_eq!(editor.pointer_event(0, 0), PointerOutcome::Idle);
    }

    #[test]
    fn test_deleting_edited_record_ends_session() {
        let mut editor = editor_with(&["Alice", "Bob"]);
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();
        editor.delete(id).unwrap();
        assert!(editor.editing_id().is_none());
    }

    #[test]
    fn test_switching_edit_row_commits_previous() {
        let mut editor = editor_with(&["Alice", "Bob"]);
        let all = ids(&editor);
        editor.begin_edit(all[0]).unwrap();
        editor.stage_edit(Field::Name, "Alicia");

        editor.begin_edit(all[1]).unwrap();
        assert_eq!(editor.editing_id(), Some(all[1]));
        assert_eq!(editor.record(all[0]).unwrap().name, "Alicia");
    }

    #[test]
    fn test_export_ignores_filter_and_page() {
        let mut editor = editor_with(&["Ann", "Bob", "Cid", "Dan"]);
        editor.set_search_term("ann");

        let mut out = Vec::new();
        let rows = editor.export_csv(&mut out).unwrap();
        assert_eq!(rows, 4);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_rename_out_of_search_ends_editing() {
        let mut editor = editor_with(&["Alice", "Alina", "Bob"]);
        editor.set_search_term("ali");
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();

        assert!(editor.commit_field(id, Field::Name, "Zed").unwrap());
        assert_eq!(editor.record(id).unwrap().name, "Zed");
        assert!(editor.editing_id().is_none());
        assert_eq!(editor.filtered().len(), 1);
    }

    #[test]
    fn test_rename_within_search_keeps_editing() {
        let mut editor = editor_with(&["Alice", "Bob"]);
        editor.set_search_term("ali");
        let id = ids(&editor)[0];
        editor.begin_edit(id).unwrap();

        editor.commit_field(id, Field::Name, "Alicia").unwrap();
        assert_eq!(editor.editing_id(), Some(id));
    }
}
