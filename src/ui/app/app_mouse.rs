use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::draft::Field;
use crate::editor::PointerOutcome;
use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::components::{PagerHit, RowButton, StatusMessage};
use crate::ui::events::InputMode;

impl App {
    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        let over_table = self.state.regions.table.contains(Position::new(x, y));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_mouse_click(x, y),
            MouseEventKind::ScrollDown if over_table => self.execute_action(Action::SelectNext),
            MouseEventKind::ScrollUp if over_table => self.execute_action(Action::SelectPrev),
            _ => {}
        }
    }

    /// Route a left click. Row buttons are checked before the edit
    /// session's click-outside test, and that test only applies to the
    /// session that existed before the press.
    pub(super) fn handle_mouse_click(&mut self, x: u16, y: u16) {
        let before = self.state.editor.editing_id();

        if let Some(button) = self.state.regions.rows.button_at(x, y) {
            match button {
                RowButton::Edit(id) => self.edit_record(id),
                RowButton::Save(id) if before == Some(id) => self.save_edit(),
                RowButton::Save(_) => {}
                RowButton::Delete(id) => self.delete_record(id),
            }
            if before.is_some() && before == self.state.editor.editing_id() {
                self.route_to_edit_session(x, y);
            }
            return;
        }

        if before.is_some() && self.route_to_edit_session(x, y) {
            return;
        }

        if let Some(field) = self.state.regions.form.field_at(x, y) {
            self.switch_mode(InputMode::Form);
            self.state.form.focus.0 = field;
            if field == Field::Gender {
                self.cycle_choice(true);
            }
            return;
        }
        if self
            .state
            .regions
            .form
            .add_button
            .is_some_and(|r| r.contains(Position::new(x, y)))
        {
            self.switch_mode(InputMode::Form);
            self.submit_form();
            return;
        }
        if self
            .state
            .regions
            .search
            .is_some_and(|r| r.contains(Position::new(x, y)))
        {
            self.switch_mode(InputMode::Search);
            return;
        }
        if let Some(hit) = self.state.regions.pager.hit(x, y) {
            self.handle_pager_click(hit);
            return;
        }
        if let Some(index) = self.state.regions.rows.row_at(x, y).map(|r| r.index) {
            self.switch_mode(InputMode::Table);
            self.state.selected = index;
            return;
        }
        if self.state.regions.table.contains(Position::new(x, y)) {
            self.switch_mode(InputMode::Table);
        }
    }

    /// Hand the press to the edit session. Returns true when the press was
    /// consumed by the edited row.
    fn route_to_edit_session(&mut self, x: u16, y: u16) -> bool {
        match self.state.editor.pointer_event(x, y) {
            PointerOutcome::Idle => false,
            PointerOutcome::Focused(field) => {
                self.state.input_mode = InputMode::Editing;
                if field == Field::Gender {
                    self.cycle_choice(true);
                }
                true
            }
            PointerOutcome::FocusRejected(err) => {
                self.state.set_status(StatusMessage::error(err.to_string()));
                true
            }
            PointerOutcome::InsideRow => true,
            PointerOutcome::Exited { rejected } => {
                if let Some(err) = rejected {
                    self.state.set_status(StatusMessage::error(format!(
                        "{} (previous value kept)",
                        err
                    )));
                }
                if self.state.input_mode == InputMode::Editing {
                    self.state.input_mode = InputMode::Table;
                }
                false
            }
        }
    }

    fn handle_pager_click(&mut self, hit: PagerHit) {
        match hit {
            PagerHit::Prev => self.execute_action(Action::PrevPage),
            PagerHit::Next => self.execute_action(Action::NextPage),
            PagerHit::Page(page) => {
                if let Err(e) = self.state.editor.go_to_page(page) {
                    self.state.set_status(StatusMessage::error(e.to_string()));
                } else {
                    self.state.selected = 0;
                }
            }
            PagerHit::Export => self.execute_action(Action::Export),
        }
    }
}
