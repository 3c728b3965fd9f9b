//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 175, 239);
pub const ACCENT_SUCCESS: Color = Color::Rgb(152, 195, 121);
pub const ACCENT_ERROR: Color = Color::Rgb(224, 108, 117);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
pub const TEXT_SECONDARY: Color = Color::Rgb(171, 178, 191);
pub const TEXT_MUTED: Color = Color::Rgb(130, 137, 151);
pub const TEXT_FAINT: Color = Color::Rgb(92, 99, 112);

pub const BORDER_DEFAULT: Color = Color::Rgb(62, 68, 81);
pub const BORDER_FOCUSED: Color = ACCENT_PRIMARY;

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const INPUT_BG: Color = Color::Rgb(35, 38, 46);
pub const STATUS_BAR_BG: Color = Color::Rgb(30, 30, 30);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
