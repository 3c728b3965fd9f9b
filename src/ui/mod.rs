pub mod action;
pub mod app;
pub mod app_state;
pub mod components;
pub mod events;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use app_state::AppState;
pub use events::{AppEvent, InputMode};
pub use terminal_guard::{install_panic_hook, TerminalGuard};
