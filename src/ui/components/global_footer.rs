use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use super::key_hints::render_key_hints;
use crate::ui::events::InputMode;

/// Footer showing the shortcuts of the focused pane, read from the active
/// keybindings so user overrides show up.
pub struct GlobalFooter {
    hints: Vec<(String, &'static str)>,
}

impl GlobalFooter {
    pub fn for_mode(mode: InputMode, keys: &KeybindingConfig) -> Self {
        let context = KeyContext::from_input_mode(mode);
        let hints = Self::actions_for(mode)
            .iter()
            .filter_map(|action| {
                keys.key_for(action, context)
                    .map(|key| (key.to_string(), action.description()))
            })
            .collect();
        Self { hints }
    }

    fn actions_for(mode: InputMode) -> &'static [Action] {
        match mode {
            InputMode::Form => &[
                Action::NextField,
                Action::Submit,
                Action::FocusSearch,
                Action::FocusTable,
                Action::Export,
                Action::Quit,
            ],
            InputMode::Search => &[
                Action::FocusTable,
                Action::FocusForm,
                Action::Export,
                Action::Quit,
            ],
            InputMode::Table => &[
                Action::SelectNext,
                Action::EditSelected,
                Action::DeleteSelected,
                Action::NextPage,
                Action::PrevPage,
                Action::FocusForm,
                Action::FocusSearch,
                Action::Export,
                Action::Quit,
            ],
            InputMode::Editing => &[
                Action::NextField,
                Action::SaveEdit,
                Action::CancelEdit,
                Action::Quit,
            ],
        }
    }

    pub fn hints(&self) -> &[(String, &'static str)] {
        &self.hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(area, buf, &self.hints);
    }
}
