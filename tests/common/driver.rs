//! Drive the app with synthetic terminal events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use roster::ui::AppEvent;
use roster::{App, Config};

use super::terminal::render_app;

/// App with default settings and exports going to `export_dir`.
pub fn app_exporting_to(export_dir: &std::path::Path) -> App {
    App::new(Config::default().with_export_dir(export_dir.to_path_buf()))
}

pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(AppEvent::Input(Event::Key(KeyEvent::new(code, modifiers))));
}

pub fn ctrl(app: &mut App, c: char) {
    press_with(app, KeyCode::Char(c), KeyModifiers::CONTROL);
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Left click at a screen position, then redraw so hit regions follow the
/// new state.
pub fn click(app: &mut App, x: u16, y: u16) {
    app.handle_event(AppEvent::Input(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })));
    render_app(app);
}

/// Fill the add form from the keyboard and submit it. The app must have
/// the form focused with the cursor on the name field.
pub fn add_via_form(app: &mut App, name: &str, gender_letter: char, age: &str) {
    type_text(app, name);
    press(app, KeyCode::Tab);
    press(app, KeyCode::Char(gender_letter));
    press(app, KeyCode::Tab);
    type_text(app, age);
    press(app, KeyCode::Enter);
}
