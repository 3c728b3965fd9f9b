//! End-to-end flows: add, search, paginate, edit inline, delete, export.

use crossterm::event::KeyCode;
use roster::ui::InputMode;
use roster::{App, Config, Field};

use super::common::determinism::test_now;
use super::common::driver::{add_via_form, app_exporting_to, click, ctrl, press, type_text};
use super::common::terminal::{assert_buffer_contains, find_text, render_app, rows_containing};

fn app_with_records(names: &[&str]) -> App {
    let mut app = App::new(Config::default());
    for name in names {
        add_via_form(&mut app, name, 'f', "20");
    }
    render_app(&mut app);
    app
}

#[test]
fn test_add_alice_from_empty_roster() {
    let mut app = App::new(Config::default());
    add_via_form(&mut app, "Alice", 'f', "20");

    let records = app.editor().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Alice");
    assert_eq!(records[0].gender, "female");
    assert_eq!(records[0].age, 20);
    assert!(app.editor().draft().is_empty());
    assert!(app.editor().draft().errors().is_empty());

    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "Added Alice");
    let row = rows_containing(&screen, "[Edit]");
    assert_eq!(row.len(), 1);
    assert!(rows_containing(&screen, "Female").contains(&row[0]));
}

#[test]
fn test_negative_age_is_rejected() {
    let mut app = App::new(Config::default());
    add_via_form(&mut app, "Bob", 'm', "-5");

    assert!(app.editor().is_empty());
    assert_eq!(
        app.editor().draft().error(Field::Age).map(|e| e.to_string()),
        Some("Valid age is required".to_string())
    );
    assert_eq!(app.state().form.focus.0, Field::Age);

    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "Valid age is required");

    // Fixing the age and resubmitting succeeds without retyping the rest
    ctrl(&mut app, 'u');
    type_text(&mut app, "30");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor().len(), 1);
    assert_eq!(app.editor().records()[0].age, 30);
}

#[test]
fn test_delete_only_record_on_second_page_goes_back() {
    let mut app = app_with_records(&["A1", "A2", "A3", "A4"]);
    ctrl(&mut app, 't');
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.editor().current_page(), 2);

    let screen = render_app(&mut app);
    let (x, y) = find_text(&screen, "[Delete]").unwrap();
    click(&mut app, x, y);

    assert_eq!(app.editor().len(), 3);
    assert_eq!(app.editor().current_page(), 1);
    let screen = render_app(&mut app);
    assert_eq!(rows_containing(&screen, "[Delete]").len(), 3);
}

#[test]
fn test_search_narrows_table_and_resets_page() {
    let mut app = app_with_records(&["Alice", "Bob", "Carol", "Alina", "Dave"]);
    ctrl(&mut app, 't');
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.editor().current_page(), 2);

    ctrl(&mut app, 'f');
    type_text(&mut app, "ALI");
    assert_eq!(app.editor().current_page(), 1);

    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "Alice");
    assert_buffer_contains(&screen, "Alina");
    assert!(find_text(&screen, "Carol").is_none());

    type_text(&mut app, "zzz");
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "No records found");
}

#[test]
fn test_inline_edit_with_keyboard() {
    let mut app = app_with_records(&["Alice"]);
    ctrl(&mut app, 't');
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.input_mode(), InputMode::Editing);
    assert_eq!(
        app.editor().edit_session().map(|s| s.focus()),
        Some(Field::Name)
    );

    ctrl(&mut app, 'u');
    type_text(&mut app, "Alicia");
    press(&mut app, KeyCode::Tab);
    // Name committed on blur
    assert_eq!(app.editor().records()[0].name, "Alicia");

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.editor().records()[0].gender, "male");

    ctrl(&mut app, 'u');
    type_text(&mut app, "abc");
    press(&mut app, KeyCode::Enter);
    // Rejected age keeps the row open and the record intact
    assert_eq!(app.input_mode(), InputMode::Editing);
    assert_eq!(app.editor().records()[0].age, 20);
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "Valid age is required");

    ctrl(&mut app, 'u');
    type_text(&mut app, "21");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::Table);
    assert_eq!(app.editor().records()[0].age, 21);
}

#[test]
fn test_click_edit_then_click_outside() {
    let mut app = app_with_records(&["Alice", "Bob"]);
    let screen = render_app(&mut app);
    let (x, y) = find_text(&screen, "[Edit]").unwrap();
    click(&mut app, x, y);

    assert_eq!(app.input_mode(), InputMode::Editing);
    let screen = render_app(&mut app);
    assert_buffer_contains(&screen, "[Save]");

    ctrl(&mut app, 'u');
    type_text(&mut app, "Ann");
    let (x, y) = find_text(&screen, "Search by name").unwrap();
    click(&mut app, x, y);

    assert!(app.editor().editing_id().is_none());
    assert_eq!(app.input_mode(), InputMode::Search);
    assert_eq!(app.editor().records()[0].name, "Ann");
}

#[test]
fn test_deleting_edited_record_ends_editing() {
    let mut app = app_with_records(&["Alice"]);
    ctrl(&mut app, 't');
    press(&mut app, KeyCode::Char('e'));
    let screen = render_app(&mut app);

    let (x, y) = find_text(&screen, "[Delete]").unwrap();
    click(&mut app, x, y);

    assert!(app.editor().is_empty());
    assert!(app.editor().editing_id().is_none());
    assert_eq!(app.input_mode(), InputMode::Table);
}

#[test]
fn test_export_button_writes_full_roster() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_exporting_to(dir.path());
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        add_via_form(&mut app, name, 'f', "20");
    }
    // Narrow the view; export still covers every record
    ctrl(&mut app, 'f');
    type_text(&mut app, "bob");

    let screen = render_app(&mut app);
    let (x, y) = find_text(&screen, "[ Export CSV ]").unwrap();
    click(&mut app, x, y);

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("userdata_"));
    assert!(name.ends_with(".csv"));

    let contents = std::fs::read_to_string(&entries[0]).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "id,name,gender,age");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_quit_key() {
    let mut app = App::new(Config::default());
    ctrl(&mut app, 'q');
    assert!(app.should_quit());
}

#[test]
fn test_export_file_name_and_rows_are_stable() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(Config::default());
    add_via_form(&mut app, "Smith, Jo", 'm', "40");

    let summary = app.editor().export_to_dir(dir.path(), &test_now()).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(
        summary.path.file_name().unwrap().to_string_lossy(),
        "userdata_2024-01-01_00-00-00.csv"
    );

    let contents = std::fs::read_to_string(&summary.path).unwrap();
    // Names with commas are quoted
    assert!(contents.contains("\"Smith, Jo\",male,40"));
}
