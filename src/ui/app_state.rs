use ratatui::layout::Rect;

use crate::draft::Field;
use crate::editor::RosterEditor;
use crate::model::RecordId;
use crate::ui::components::{
    FormRegions, PagerRegions, StatusMessage, TableRegions, TextInputState,
};
use crate::ui::events::InputMode;

/// Text buffers of the add-record form. The editor's draft is the source
/// of truth; these hold the cursor position while typing.
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    pub name: TextInputState,
    pub age: TextInputState,
    pub focus: FieldFocus,
}

/// Focused form field. Wraps `Field` so the form starts on `Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFocus(pub Field);

impl Default for FieldFocus {
    fn default() -> Self {
        Self(Field::Name)
    }
}

/// Text buffers of the row being edited.
#[derive(Debug, Clone, Default)]
pub struct EditInputs {
    /// Record the buffers were loaded from
    pub id: Option<RecordId>,
    pub name: TextInputState,
    pub age: TextInputState,
}

/// Hit regions captured during the last draw.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub form: FormRegions,
    pub search: Option<Rect>,
    pub table: Rect,
    pub rows: TableRegions,
    pub pager: PagerRegions,
}

/// All mutable state of the running app.
#[derive(Debug, Default)]
pub struct AppState {
    pub editor: RosterEditor,
    pub input_mode: InputMode,
    pub form: FormInputs,
    pub search: TextInputState,
    pub edit: EditInputs,
    /// Selected row within the current page
    pub selected: usize,
    pub status: Option<StatusMessage>,
    pub regions: LayoutRegions,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(editor: RosterEditor) -> Self {
        Self {
            editor,
            ..Default::default()
        }
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn tick_status(&mut self) {
        if let Some(status) = self.status.as_mut() {
            if !status.tick() {
                self.status = None;
            }
        }
    }

    /// Id of the selected row on the current page.
    pub fn selected_id(&self) -> Option<RecordId> {
        self.editor.page_view().get(self.selected).map(|r| r.id)
    }

    /// Bring the text buffers and selection back in line with the editor
    /// after any state change.
    pub fn sync(&mut self) {
        let rows = self.editor.page_view().len();
        self.selected = self.selected.min(rows.saturating_sub(1));

        let draft = self.editor.draft();
        sync_input(&mut self.form.name, draft.value(Field::Name));
        sync_input(&mut self.form.age, draft.value(Field::Age));

        match self.editor.edit_session() {
            Some(session) => {
                if self.edit.id != Some(session.id()) {
                    self.edit.id = Some(session.id());
                    self.edit.name.set(session.staged(Field::Name));
                    self.edit.age.set(session.staged(Field::Age));
                } else {
                    sync_input(&mut self.edit.name, session.staged(Field::Name));
                    sync_input(&mut self.edit.age, session.staged(Field::Age));
                }
            }
            None => {
                self.edit = EditInputs::default();
                if self.input_mode == InputMode::Editing {
                    self.input_mode = InputMode::Table;
                }
            }
        }
    }
}

fn sync_input(input: &mut TextInputState, value: &str) {
    if input.value() != value {
        input.set(value);
    }
}
