//! Actions that can be triggered by keybindings
//!
//! Each action is one atomic UI operation. Keys map to actions through
//! [`crate::config::KeybindingConfig`]; the app decides what an action
//! means in the current input mode.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global ==========
    Quit,
    /// Focus the add-record form
    FocusForm,
    /// Focus the search box
    FocusSearch,
    /// Focus the table
    FocusTable,
    /// Move focus to the next pane (form, search, table)
    CycleFocus,
    /// Write the roster to a CSV file in the export directory
    Export,
    NextPage,
    PrevPage,

    // ========== Text editing ==========
    Backspace,
    Delete,
    DeleteWordBack,
    DeleteToStart,
    DeleteToEnd,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,

    // ========== Form & edit row ==========
    /// Focus the next input field
    NextField,
    /// Focus the previous input field
    PrevField,
    /// Step a choice field forward
    CycleChoiceNext,
    /// Step a choice field backward
    CycleChoicePrev,
    /// Add the drafted record
    Submit,

    // ========== Table ==========
    SelectNext,
    SelectPrev,
    /// Put the selected row into edit mode
    EditSelected,
    /// Delete the selected row
    DeleteSelected,

    // ========== Inline edit ==========
    /// Commit the focused cell and leave edit mode
    SaveEdit,
    /// Leave edit mode, keeping only valid values
    CancelEdit,
}

impl Action {
    /// Short description for the footer and help text
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::FocusForm => "form",
            Action::FocusSearch => "search",
            Action::FocusTable => "table",
            Action::CycleFocus => "next pane",
            Action::Export => "export CSV",
            Action::NextPage => "next page",
            Action::PrevPage => "prev page",

            Action::Backspace => "backspace",
            Action::Delete => "delete char",
            Action::DeleteWordBack => "delete word",
            Action::DeleteToStart => "delete to start",
            Action::DeleteToEnd => "delete to end",
            Action::MoveCursorLeft => "cursor left",
            Action::MoveCursorRight => "cursor right",
            Action::MoveCursorStart => "line start",
            Action::MoveCursorEnd => "line end",

            Action::NextField => "next field",
            Action::PrevField => "prev field",
            Action::CycleChoiceNext => "next option",
            Action::CycleChoicePrev => "prev option",
            Action::Submit => "add",

            Action::SelectNext => "down",
            Action::SelectPrev => "up",
            Action::EditSelected => "edit",
            Action::DeleteSelected => "delete",

            Action::SaveEdit => "save",
            Action::CancelEdit => "done",
        }
    }
}

/// Parse an action name from the config file.
pub fn parse_action(name: &str) -> Option<Action> {
    let action = match name {
        "quit" | "q" => Action::Quit,
        "focus_form" => Action::FocusForm,
        "focus_search" => Action::FocusSearch,
        "focus_table" => Action::FocusTable,
        "cycle_focus" => Action::CycleFocus,
        "export" => Action::Export,
        "next_page" => Action::NextPage,
        "prev_page" => Action::PrevPage,

        "backspace" => Action::Backspace,
        "delete" => Action::Delete,
        "delete_word_back" => Action::DeleteWordBack,
        "delete_to_start" => Action::DeleteToStart,
        "delete_to_end" => Action::DeleteToEnd,
        "move_cursor_left" => Action::MoveCursorLeft,
        "move_cursor_right" => Action::MoveCursorRight,
        "move_cursor_start" => Action::MoveCursorStart,
        "move_cursor_end" => Action::MoveCursorEnd,

        "next_field" => Action::NextField,
        "prev_field" => Action::PrevField,
        "cycle_choice_next" => Action::CycleChoiceNext,
        "cycle_choice_prev" => Action::CycleChoicePrev,
        "submit" | "add" => Action::Submit,

        "select_next" => Action::SelectNext,
        "select_prev" => Action::SelectPrev,
        "edit_selected" | "edit" => Action::EditSelected,
        "delete_selected" => Action::DeleteSelected,

        "save_edit" | "save" => Action::SaveEdit,
        "cancel_edit" => Action::CancelEdit,
        _ => return None,
    };
    Some(action)
}
