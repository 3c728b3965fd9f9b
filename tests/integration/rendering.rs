//! Screen layout checks against a TestBackend.

use crossterm::event::{KeyCode, KeyModifiers};
use roster::{App, Config};

use super::common::driver::{add_via_form, click, ctrl, press, press_with};
use super::common::terminal::{
    assert_buffer_contains, find_text, render_app, render_app_sized,
    rows_containing,
};

#[test]
fn test_empty_app_layout() {
    let mut app = App::new(Config::default());
    let screen = render_app(&mut app);

    assert_buffer_contains(&screen, "Add Student");
    assert_buffer_contains(&screen, "[ Add ]");
    assert_buffer_contains(&screen, "< select >");
    assert_buffer_contains(&screen, "Search by name...");
    assert_buffer_contains(&screen, "No records found");
    assert_buffer_contains(&screen, "< Prev");
    assert_buffer_contains(&screen, "Next >");
    assert_buffer_contains(&screen, "[ Export CSV ]");

    // Form layout comes first, then search, table and pager
    let (_, form_y) = find_text(&screen, "Add Student").unwrap();
    let (_, search_y) = find_text(&screen, "Search by name").unwrap();
    let (_, empty_y) = find_text(&screen, "No records found").unwrap();
    let (_, pager_y) = find_text(&screen, "[ Export CSV ]").unwrap();
    assert!(form_y < search_y && search_y < empty_y && empty_y < pager_y);
}

#[test]
fn test_footer_follows_focus() {
    let mut app = App::new(Config::default());
    let screen = render_app(&mut app);
    let footer = screen.area.height - 1;
    assert!(rows_containing(&screen, " add").contains(&footer));

    ctrl(&mut app, 't');
    let screen = render_app(&mut app);
    assert!(rows_containing(&screen, " edit").contains(&footer));
    assert!(rows_containing(&screen, " delete").contains(&footer));
}

#[test]
fn test_table_shows_labels_and_page_buttons() {
    let mut app = App::new(Config::default());
    for (name, letter) in [("Ann", 'f'), ("Ben", 'm'), ("Cat", 'f'), ("Dan", 'm')] {
        add_via_form(&mut app, name, letter, "30");
    }
    let screen = render_app(&mut app);

    assert_eq!(rows_containing(&screen, "[Edit]").len(), 3);
    assert_buffer_contains(&screen, "Male");
    let edit_rows = rows_containing(&screen, "[Edit]");
    assert!(rows_containing(&screen, "Dan")
        .iter()
        .all(|y| !edit_rows.contains(y)));
    assert_buffer_contains(&screen, " 1 ");
    assert_buffer_contains(&screen, " 2 ");

    ctrl(&mut app, 't');
    press(&mut app, KeyCode::PageDown);
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "Dan");
    assert_eq!(rows_containing(&screen, "[Edit]").len(), 1);
}

#[test]
fn test_edit_row_replaces_edit_with_save() {
    let mut app = App::new(Config::default());
    add_via_form(&mut app, "Ann", 'f', "30");
    add_via_form(&mut app, "Ben", 'm', "31");

    ctrl(&mut app, 't');
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let screen = render_app(&mut app);

    let save_rows = rows_containing(&screen, "[Save]");
    assert_eq!(save_rows.len(), 1);
    assert!(rows_containing(&screen, "Ben").contains(&save_rows[0]));
    assert!(rows_containing(&screen, "< Male >").contains(&save_rows[0]));
    assert_eq!(rows_containing(&screen, "[Edit]").len(), 1);
}

#[test]
fn test_choice_cycles_with_alt_arrows() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Tab);
    press_with(&mut app, KeyCode::Right, KeyModifiers::ALT);
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "< Male >");

    press_with(&mut app, KeyCode::Left, KeyModifiers::ALT);
    press_with(&mut app, KeyCode::Left, KeyModifiers::ALT);
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "< Male >");

    press(&mut app, KeyCode::Right);
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "< Female >");
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = App::new(Config::default());
    add_via_form(&mut app, "Ann", 'f', "30");
    for (width, height) in [(40, 10), (20, 6), (10, 3)] {
        render_app_sized(&mut app, width, height);
    }
}

#[test]
fn test_page_larger_than_viewport_scrolls_to_selection() {
    let mut app = App::new(Config::default().with_page_size(20));
    for i in 0..20 {
        add_via_form(&mut app, &format!("S{i:02}"), 'f', "20");
    }
    assert_eq!(app.editor().page_count(), 1);
    assert_eq!(app.editor().page_view().len(), 20);

    ctrl(&mut app, 't');
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "+10 more");
    assert_eq!(rows_containing(&screen, "[Edit]").len(), 10);

    for _ in 0..19 {
        press(&mut app, KeyCode::Down);
    }
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "10 above");
    let edit_rows = rows_containing(&screen, "[Edit]");
    let last = rows_containing(&screen, "S19")
        .into_iter()
        .find(|y| edit_rows.contains(y))
        .expect("last record is on screen");

    // The scrolled-in row is clickable
    let (edit_x, _) = find_text(&screen, "[Edit]").unwrap();
    click(&mut app, edit_x, last);
    let last_id = app.editor().records()[19].id;
    assert_eq!(app.editor().editing_id(), Some(last_id));
}
