use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{KeyCombo, KeyContext};
use crate::draft::Field;
use crate::ui::app::App;
use crate::ui::components::TextInputState;
use crate::ui::events::InputMode;

impl App {
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        let context = KeyContext::from_input_mode(self.state.input_mode);

        // Text input (typing characters) handled specially
        if self.should_handle_as_text_input(&key, context) {
            self.handle_text_input(key);
            return;
        }

        // Look up action in config (context-specific first, then global)
        let key_combo = KeyCombo::from_key_event(&key);
        if let Some(action) = self.config.keybindings.get_action(&key_combo, context) {
            self.execute_action(action.clone());
        }
    }

    /// Printable characters without Control/Alt are typed into the focused
    /// field in text-input contexts.
    pub(super) fn should_handle_as_text_input(&self, key: &KeyEvent, context: KeyContext) -> bool {
        let has_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT);
        !has_modifier && matches!(key.code, KeyCode::Char(_)) && context.accepts_text()
    }

    pub(super) fn handle_text_input(&mut self, key: KeyEvent) {
        let KeyCode::Char(c) = key.code else {
            return;
        };

        if self.focused_field() == Some(Field::Gender) {
            self.type_into_choice(c);
            return;
        }
        self.edit_focused_input(|input| input.insert_char(c));
    }

    pub(super) fn handle_paste_input(&mut self, pasted: &str) {
        let context = KeyContext::from_input_mode(self.state.input_mode);
        if !context.accepts_text() || self.focused_field() == Some(Field::Gender) {
            return;
        }
        // Fields are single-line
        let text: String = pasted.chars().filter(|c| !c.is_control()).collect();
        self.edit_focused_input(|input| {
            for c in text.chars() {
                input.insert_char(c);
            }
        });
    }

    /// The focused record field in the form or the edited row.
    pub(super) fn focused_field(&self) -> Option<Field> {
        match self.state.input_mode {
            InputMode::Form => Some(self.state.form.focus.0),
            InputMode::Editing => self.state.editor.edit_session().map(|s| s.focus()),
            InputMode::Search | InputMode::Table => None,
        }
    }

    /// Space steps a choice forward; a letter jumps to the first option
    /// whose label starts with it.
    fn type_into_choice(&mut self, c: char) {
        if c == ' ' {
            self.cycle_choice(true);
            return;
        }
        let wanted = c.to_lowercase().collect::<String>();
        let Some(value) = self
            .state
            .editor
            .genders()
            .iter()
            .find(|o| o.label.to_lowercase().starts_with(&wanted))
            .map(|o| o.value.clone())
        else {
            return;
        };
        match self.state.input_mode {
            InputMode::Form => self.state.editor.update_draft(Field::Gender, value),
            InputMode::Editing => self.state.editor.stage_edit(Field::Gender, value),
            InputMode::Search | InputMode::Table => {}
        }
    }

    pub(super) fn cycle_choice(&mut self, forward: bool) {
        match self.state.input_mode {
            InputMode::Form => self.state.editor.cycle_draft_gender(forward),
            InputMode::Editing => self.state.editor.cycle_edit_gender(forward),
            InputMode::Search | InputMode::Table => {}
        }
    }

    /// Apply `edit` to the focused text buffer and push a changed value to
    /// the editor. Returns false when no text buffer has focus.
    pub(super) fn edit_focused_input(&mut self, edit: impl FnOnce(&mut TextInputState)) -> bool {
        match self.state.input_mode {
            InputMode::Form => {
                let field = self.state.form.focus.0;
                let input = match field {
                    Field::Name => &mut self.state.form.name,
                    Field::Age => &mut self.state.form.age,
                    Field::Gender => return false,
                };
                let before = input.value().to_string();
                edit(input);
                if input.value() != before {
                    let value = input.value().to_string();
                    self.state.editor.update_draft(field, value);
                }
            }
            InputMode::Search => {
                let before = self.state.search.value().to_string();
                edit(&mut self.state.search);
                if self.state.search.value() != before {
                    let term = self.state.search.value().to_string();
                    self.state.editor.set_search_term(term);
                    self.state.selected = 0;
                }
            }
            InputMode::Editing => {
                let Some(field) = self.state.editor.edit_session().map(|s| s.focus()) else {
                    return false;
                };
                let input = match field {
                    Field::Name => &mut self.state.edit.name,
                    Field::Age => &mut self.state.edit.age,
                    Field::Gender => return false,
                };
                let before = input.value().to_string();
                edit(input);
                if input.value() != before {
                    let value = input.value().to_string();
                    self.state.editor.stage_edit(field, value);
                }
            }
            InputMode::Table => return false,
        }
        true
    }
}
