//! Default keybindings
//!
//! Used when the config file has no `[keys]` table; user bindings are
//! merged on top of these.

use super::keys::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;

fn bind(config: &mut KeybindingConfig, context: KeyContext, key: &str, action: Action) {
    match key.parse() {
        Ok(combo) => config.bind(context, combo, action),
        Err(e) => tracing::warn!(key, error = %e, "Invalid default keybinding"),
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();
    use KeyContext::*;

    // ========== Global ==========
    bind(&mut config, Global, "C-q", Action::Quit);
    bind(&mut config, Global, "C-c", Action::Quit);
    bind(&mut config, Global, "C-n", Action::FocusForm);
    bind(&mut config, Global, "C-f", Action::FocusSearch);
    bind(&mut config, Global, "C-t", Action::FocusTable);
    bind(&mut config, Global, "C-s", Action::Export);
    bind(&mut config, Global, "<PageDown>", Action::NextPage);
    bind(&mut config, Global, "<PageUp>", Action::PrevPage);

    // Readline-style editing, active wherever a text field has focus
    bind(&mut config, Global, "<BS>", Action::Backspace);
    bind(&mut config, Global, "C-h", Action::Backspace);
    bind(&mut config, Global, "<Del>", Action::Delete);
    bind(&mut config, Global, "C-d", Action::Delete);
    bind(&mut config, Global, "C-w", Action::DeleteWordBack);
    bind(&mut config, Global, "M-<BS>", Action::DeleteWordBack);
    bind(&mut config, Global, "C-u", Action::DeleteToStart);
    bind(&mut config, Global, "C-k", Action::DeleteToEnd);
    bind(&mut config, Global, "<Left>", Action::MoveCursorLeft);
    bind(&mut config, Global, "<Right>", Action::MoveCursorRight);
    bind(&mut config, Global, "<Home>", Action::MoveCursorStart);
    bind(&mut config, Global, "C-a", Action::MoveCursorStart);
    bind(&mut config, Global, "<End>", Action::MoveCursorEnd);
    bind(&mut config, Global, "C-e", Action::MoveCursorEnd);

    // ========== Form ==========
    bind(&mut config, Form, "<CR>", Action::Submit);
    bind(&mut config, Form, "<Tab>", Action::NextField);
    bind(&mut config, Form, "<Down>", Action::NextField);
    bind(&mut config, Form, "<S-Tab>", Action::PrevField);
    bind(&mut config, Form, "<Up>", Action::PrevField);
    bind(&mut config, Form, "<Esc>", Action::FocusTable);
    bind(&mut config, Form, "M-<Right>", Action::CycleChoiceNext);
    bind(&mut config, Form, "M-<Left>", Action::CycleChoicePrev);

    // ========== Search ==========
    bind(&mut config, Search, "<CR>", Action::FocusTable);
    bind(&mut config, Search, "<Esc>", Action::FocusTable);
    bind(&mut config, Search, "<Down>", Action::FocusTable);
    bind(&mut config, Search, "<Tab>", Action::CycleFocus);

    // ========== Table ==========
    bind(&mut config, Table, "j", Action::SelectNext);
    bind(&mut config, Table, "<Down>", Action::SelectNext);
    bind(&mut config, Table, "k", Action::SelectPrev);
    bind(&mut config, Table, "<Up>", Action::SelectPrev);
    bind(&mut config, Table, "l", Action::NextPage);
    bind(&mut config, Table, "<Right>", Action::NextPage);
    bind(&mut config, Table, "h", Action::PrevPage);
    bind(&mut config, Table, "<Left>", Action::PrevPage);
    bind(&mut config, Table, "e", Action::EditSelected);
    bind(&mut config, Table, "<CR>", Action::EditSelected);
    bind(&mut config, Table, "d", Action::DeleteSelected);
    bind(&mut config, Table, "<Del>", Action::DeleteSelected);
    bind(&mut config, Table, "a", Action::FocusForm);
    bind(&mut config, Table, "/", Action::FocusSearch);
    bind(&mut config, Table, "x", Action::Export);
    bind(&mut config, Table, "q", Action::Quit);
    bind(&mut config, Table, "<Tab>", Action::CycleFocus);

    // ========== Edit ==========
    bind(&mut config, Edit, "<CR>", Action::SaveEdit);
    bind(&mut config, Edit, "<Esc>", Action::CancelEdit);
    bind(&mut config, Edit, "<Tab>", Action::NextField);
    bind(&mut config, Edit, "<S-Tab>", Action::PrevField);
    bind(&mut config, Edit, "M-<Right>", Action::CycleChoiceNext);
    bind(&mut config, Edit, "M-<Left>", Action::CycleChoicePrev);

    config
}
