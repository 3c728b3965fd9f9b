use crate::draft::Field;
use crate::editor::EditorError;
use crate::model::RecordId;
use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::components::{StatusMessage, TextInputState};
use crate::ui::events::InputMode;

impl App {
    /// Execute a keybinding action in the current input mode.
    pub(super) fn execute_action(&mut self, action: Action) {
        match action {
            // ========== Global ==========
            Action::Quit => self.state.should_quit = true,
            Action::FocusForm => self.switch_mode(InputMode::Form),
            Action::FocusSearch => self.switch_mode(InputMode::Search),
            Action::FocusTable => self.switch_mode(InputMode::Table),
            Action::CycleFocus => self.switch_mode(self.state.input_mode.next_pane()),
            Action::Export => self.export_roster(),
            Action::NextPage => {
                if self.state.editor.next_page() {
                    self.state.selected = 0;
                }
            }
            Action::PrevPage => {
                if self.state.editor.prev_page() {
                    self.state.selected = 0;
                }
            }

            // ========== Text editing ==========
            Action::Backspace => {
                self.edit_focused_input(TextInputState::backspace);
            }
            Action::Delete => {
                self.edit_focused_input(TextInputState::delete_forward);
            }
            Action::DeleteWordBack => {
                self.edit_focused_input(TextInputState::delete_word_back);
            }
            Action::DeleteToStart => {
                self.edit_focused_input(TextInputState::delete_to_start);
            }
            Action::DeleteToEnd => {
                self.edit_focused_input(TextInputState::delete_to_end);
            }
            Action::MoveCursorLeft => {
                if self.focused_field() == Some(Field::Gender) {
                    self.cycle_choice(false);
                } else {
                    self.edit_focused_input(TextInputState::move_left);
                }
            }
            Action::MoveCursorRight => {
                if self.focused_field() == Some(Field::Gender) {
                    self.cycle_choice(true);
                } else {
                    self.edit_focused_input(TextInputState::move_right);
                }
            }
            Action::MoveCursorStart => {
                self.edit_focused_input(TextInputState::move_start);
            }
            Action::MoveCursorEnd => {
                self.edit_focused_input(TextInputState::move_end);
            }

            // ========== Form & edit row ==========
            Action::NextField => self.step_field(true),
            Action::PrevField => self.step_field(false),
            Action::CycleChoiceNext => self.cycle_choice(true),
            Action::CycleChoicePrev => self.cycle_choice(false),
            Action::Submit => self.submit_form(),

            // ========== Table ==========
            Action::SelectNext => self.select_next(),
            Action::SelectPrev => self.select_prev(),
            Action::EditSelected => {
                if let Some(id) = self.state.selected_id() {
                    self.edit_record(id);
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.state.selected_id() {
                    self.delete_record(id);
                }
            }

            // ========== Inline edit ==========
            Action::SaveEdit => self.save_edit(),
            Action::CancelEdit => self.switch_mode(InputMode::Table),
        }
    }

    /// Move keyboard focus to another pane. Leaving the edited row commits
    /// its focused cell.
    pub(super) fn switch_mode(&mut self, mode: InputMode) {
        if self.state.input_mode == InputMode::Editing && mode != InputMode::Editing {
            self.leave_edit();
        }
        self.state.input_mode = mode;
    }

    pub(super) fn leave_edit(&mut self) {
        if let Some(err) = self.state.editor.leave_edit() {
            self.state
                .set_status(StatusMessage::error(format!("{} (previous value kept)", err)));
        }
    }

    fn step_field(&mut self, forward: bool) {
        match self.state.input_mode {
            InputMode::Form => {
                let focus = self.state.form.focus.0;
                self.state.form.focus.0 = if forward { focus.next() } else { focus.prev() };
            }
            InputMode::Editing => {
                let Some(focus) = self.state.editor.edit_session().map(|s| s.focus()) else {
                    return;
                };
                let target = if forward { focus.next() } else { focus.prev() };
                self.focus_edit_field(target);
            }
            InputMode::Search | InputMode::Table => {}
        }
    }

    pub(super) fn focus_edit_field(&mut self, field: Field) {
        if let Err(e) = self.state.editor.focus_field(field) {
            self.state.set_status(StatusMessage::error(e.to_string()));
        }
    }

    pub(super) fn submit_form(&mut self) {
        match self.state.editor.add() {
            Ok(id) => {
                let name = self
                    .state
                    .editor
                    .record(id)
                    .map(|r| r.name.clone())
                    .unwrap_or_default();
                self.state.form.focus.0 = Field::Name;
                self.state
                    .set_status(StatusMessage::success(format!("Added {}", name)));
            }
            Err(EditorError::Validation(errors)) => {
                if let Some((field, _)) = errors.iter().next() {
                    self.state.form.focus.0 = *field;
                }
                self.state.set_status(StatusMessage::error(errors.to_string()));
            }
            Err(e) => self.state.set_status(StatusMessage::error(e.to_string())),
        }
    }

    fn select_next(&mut self) {
        let rows = self.state.editor.page_view().len();
        if self.state.selected + 1 < rows {
            self.state.selected += 1;
        } else if self.state.editor.next_page() {
            self.state.selected = 0;
        }
    }

    fn select_prev(&mut self) {
        if self.state.selected > 0 {
            self.state.selected -= 1;
        } else if self.state.editor.prev_page() {
            self.state.selected = self.state.editor.page_view().len().saturating_sub(1);
        }
    }

    pub(super) fn edit_record(&mut self, id: RecordId) {
        let previous = self.state.editor.editing_id();
        if previous.is_some() && previous != Some(id) {
            self.leave_edit();
        }
        match self.state.editor.begin_edit(id) {
            Ok(()) => {
                if let Some(index) = self
                    .state
                    .editor
                    .page_view()
                    .iter()
                    .position(|r| r.id == id)
                {
                    self.state.selected = index;
                }
                self.state.input_mode = InputMode::Editing;
            }
            Err(e) => self.state.set_status(StatusMessage::error(e.to_string())),
        }
    }

    pub(super) fn delete_record(&mut self, id: RecordId) {
        match self.state.editor.delete(id) {
            Ok(record) => self
                .state
                .set_status(StatusMessage::info(format!("Deleted {}", record.name))),
            Err(e) => self.state.set_status(StatusMessage::error(e.to_string())),
        }
    }

    pub(super) fn save_edit(&mut self) {
        match self.state.editor.end_edit() {
            Ok(()) => {
                self.state.input_mode = InputMode::Table;
                self.state.set_status(StatusMessage::success("Saved"));
            }
            Err(e) => self.state.set_status(StatusMessage::error(e.to_string())),
        }
    }

    pub(super) fn export_roster(&mut self) {
        let now = chrono::Local::now();
        match self
            .state
            .editor
            .export_to_dir(&self.config.export_dir, &now)
        {
            Ok(summary) => self.state.set_status(StatusMessage::success(format!(
                "Exported {} {} to {}",
                summary.rows,
                if summary.rows == 1 { "record" } else { "records" },
                summary.path.display()
            ))),
            Err(e) => {
                tracing::error!(error = %e, dir = %self.config.export_dir.display(), "Export failed");
                self.state.set_status(StatusMessage::error(e.to_string()));
            }
        }
    }
}
