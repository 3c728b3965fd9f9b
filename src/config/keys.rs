//! Keybinding types and vim-style key notation parsing.
//!
//! Bindings are written as `C-x`, `M-x`, `S-<Tab>`, `<CR>`, `<PageDown>` and
//! resolved per [`KeyContext`], falling back to the global table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::ui::action::Action;
use crate::ui::events::InputMode;

/// A key code plus its modifiers, normalised so that parsed notation and
/// live key events compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Normalise a terminal key event.
    ///
    /// Uppercase letters become lowercase + SHIFT, and BackTab drops the
    /// SHIFT some terminals report alongside it.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::BackTab => Self {
                code: KeyCode::BackTab,
                modifiers: event.modifiers - KeyModifiers::SHIFT,
            },
            code => Self {
                code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefix = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            prefix.push_str("C-");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            prefix.push_str("M-");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            prefix.push_str("S-");
        }

        let key = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<S-Tab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::PageUp => "<PageUp>".to_string(),
            KeyCode::PageDown => "<PageDown>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            other => format!("{:?}", other),
        };

        write!(f, "{}{}", prefix, key)
    }
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}

/// Which part of the screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Bindings that apply everywhere unless a context overrides them
    Global,
    /// Add-record form
    Form,
    /// Search box
    Search,
    /// Table navigation
    Table,
    /// A row in inline-edit mode
    Edit,
}

impl KeyContext {
    /// Every context with its own bindings table.
    pub fn all_contexts() -> &'static [KeyContext] {
        &[
            KeyContext::Form,
            KeyContext::Search,
            KeyContext::Table,
            KeyContext::Edit,
        ]
    }

    pub fn from_input_mode(mode: InputMode) -> Self {
        match mode {
            InputMode::Form => KeyContext::Form,
            InputMode::Search => KeyContext::Search,
            InputMode::Table => KeyContext::Table,
            InputMode::Editing => KeyContext::Edit,
        }
    }

    /// Section name in the `[keys]` table of the config file.
    pub fn config_key(&self) -> &'static str {
        match self {
            KeyContext::Global => "global",
            KeyContext::Form => "form",
            KeyContext::Search => "search",
            KeyContext::Table => "table",
            KeyContext::Edit => "edit",
        }
    }

    /// Contexts whose unbound printable keys are typed into a text field.
    pub fn accepts_text(&self) -> bool {
        matches!(self, KeyContext::Form | KeyContext::Search | KeyContext::Edit)
    }
}

/// All keybindings: a global table plus per-context overrides.
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Action>,
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context bindings win over global ones.
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<&Action> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
            .or_else(|| self.global.get(key))
    }

    pub fn bind(&mut self, context: KeyContext, key: KeyCombo, action: Action) {
        match context {
            KeyContext::Global => {
                self.global.insert(key, action);
            }
            ctx => {
                self.context.entry(ctx).or_default().insert(key, action);
            }
        }
    }

    /// Layer `other` on top of these bindings.
    pub fn merge(&mut self, other: KeybindingConfig) {
        self.global.extend(other.global);
        for (ctx, bindings) in other.context {
            self.context.entry(ctx).or_default().extend(bindings);
        }
    }

    /// First key bound to `action` in `context` (or globally), for hint bars.
    pub fn key_for(&self, action: &Action, context: KeyContext) -> Option<&KeyCombo> {
        self.context
            .get(&context)
            .and_then(|map| first_key_for(map, action))
            .or_else(|| first_key_for(&self.global, action))
    }
}

fn first_key_for<'a>(map: &'a HashMap<KeyCombo, Action>, action: &Action) -> Option<&'a KeyCombo> {
    map.iter()
        .filter(|(_, a)| *a == action)
        .map(|(k, _)| k)
        .min_by_key(|k| k.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

/// Parse vim-style key notation into a [`KeyCombo`].
///
/// - `C-x`, `M-x`, `S-x` and combinations such as `C-S-x`
/// - uppercase letters imply SHIFT (`G` is `S-g`)
/// - bracketed names: `<CR>`, `<Esc>`, `<Tab>`, `<S-Tab>`, `<BS>`, `<Del>`,
///   `<Up>`/`<Down>`/`<Left>`/`<Right>`, `<PageUp>`/`<PageDown>`,
///   `<Home>`/`<End>`, `<Space>`, `<F1>`..`<F12>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_bracketed(&s[1..s.len() - 1]);
    }

    // Modifiers in front of a bracketed key: "M-<BS>", "C-<S-Tab>".
    if let Some(lt) = s.find('<') {
        if lt > 0 && s.len() > lt + 2 && s.ends_with('>') {
            let mut combo = parse_bracketed(&s[lt + 1..s.len() - 1])?;
            combo.modifiers |= parse_modifiers(s[..lt].trim_end_matches('-'))?;
            return Ok(normalise(combo));
        }
    }

    // "C-" followed by "-" or a bare "-" are keys, not separators.
    let (prefix, key) = match s.rfind('-') {
        Some(idx) if idx + 1 < s.len() => (&s[..idx], &s[idx + 1..]),
        Some(idx) if idx > 0 => (&s[..idx - 1], "-"),
        _ => ("", s),
    };

    let mut modifiers = parse_modifiers(prefix)?;
    if key.is_empty() {
        return Err(KeyParseError::NoKey);
    }

    let mut chars = key.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if c.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c.to_ascii_lowercase())
        }
        _ => special_key(key)?,
    };

    Ok(normalise(KeyCombo::new(code, modifiers)))
}

fn parse_bracketed(inner: &str) -> Result<KeyCombo, KeyParseError> {
    let (prefix, name) = match inner.rfind('-') {
        Some(idx) if idx + 1 < inner.len() => (&inner[..idx], &inner[idx + 1..]),
        _ => ("", inner),
    };
    let modifiers = parse_modifiers(prefix)?;
    let code = special_key(name)?;
    Ok(normalise(KeyCombo::new(code, modifiers)))
}

fn parse_modifiers(prefix: &str) -> Result<KeyModifiers, KeyParseError> {
    let mut modifiers = KeyModifiers::NONE;
    if prefix.is_empty() {
        return Ok(modifiers);
    }
    for part in prefix.split('-') {
        match part {
            "C" => modifiers |= KeyModifiers::CONTROL,
            "M" | "A" => modifiers |= KeyModifiers::ALT,
            "S" => modifiers |= KeyModifiers::SHIFT,
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        }
    }
    Ok(modifiers)
}

fn special_key(name: &str) -> Result<KeyCode, KeyParseError> {
    let code = match name.to_ascii_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "PAGEUP" | "PGUP" => KeyCode::PageUp,
        "PAGEDOWN" | "PGDN" => KeyCode::PageDown,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        upper if upper.len() > 1 && upper.starts_with('F') => {
            let num: u8 = upper[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidKey(name.to_string()))?;
            if !(1..=12).contains(&num) {
                return Err(KeyParseError::InvalidKey(name.to_string()));
            }
            KeyCode::F(num)
        }
        _ => return Err(KeyParseError::InvalidSpecialKey(name.to_string())),
    };
    Ok(code)
}

/// `S-<Tab>` is delivered by terminals as BackTab.
fn normalise(combo: KeyCombo) -> KeyCombo {
    if combo.code == KeyCode::Tab && combo.modifiers.contains(KeyModifiers::SHIFT) {
        return KeyCombo::new(KeyCode::BackTab, combo.modifiers - KeyModifiers::SHIFT);
    }
    combo
}
