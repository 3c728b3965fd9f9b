use std::io;
use std::time::Duration;

use crossterm::{
    event::{EnableBracketedPaste, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position},
    Frame, Terminal,
};

use crate::config::Config;
use crate::draft::Field;
use crate::editor::RosterEditor;
use crate::ui::app_state::AppState;
use crate::ui::components::{
    EditRow, FormPanel, GlobalFooter, PaginationBar, RosterTable, SearchBox, StatusLine,
    FORM_HEIGHT, SEARCH_HEIGHT,
};
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::terminal_guard::TerminalGuard;

mod app_actions;
mod app_input;
mod app_mouse;

/// Interval of the tick that ages status messages.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Main application: the roster editor plus the terminal UI around it.
pub struct App {
    /// Application configuration
    config: Config,
    state: AppState,
}

impl App {
    pub fn new(config: Config) -> Self {
        let editor = RosterEditor::new(config.editor_settings());
        Self {
            config,
            state: AppState::new(editor),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn editor(&self) -> &RosterEditor {
        &self.state.editor
    }

    pub fn input_mode(&self) -> InputMode {
        self.state.input_mode
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard::new();
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK_INTERVAL);

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = tokio::select! {
                input = events.next() => match input {
                    Some(Ok(event)) => AppEvent::Input(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = ticker.tick() => AppEvent::Tick,
            };
            self.handle_event(event);

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one event to the app state.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                self.handle_key_event(key);
            }
            AppEvent::Input(Event::Mouse(mouse)) => self.handle_mouse_event(mouse),
            AppEvent::Input(Event::Paste(text)) => self.handle_paste_input(&text),
            AppEvent::Input(_) => {}
            AppEvent::Tick => self.state.tick_status(),
        }
        self.state.sync();
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let [form_area, search_area, table_area, pager_area, status_area, footer_area] =
            Layout::vertical([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(f.area());

        let mode = self.state.input_mode;
        let state = &mut self.state;
        let buf = f.buffer_mut();

        let editor = &state.editor;
        let draft_gender = editor.draft().value(Field::Gender);
        let form = FormPanel {
            name: &state.form.name,
            age: &state.form.age,
            gender_label: (!draft_gender.is_empty())
                .then(|| editor.genders().label_for(draft_gender)),
            focus: (mode == InputMode::Form).then_some(state.form.focus.0),
            errors: editor.draft().errors(),
        }
        .render(form_area, buf);

        let (search_input, search_cursor) = SearchBox {
            input: &state.search,
            focused: mode == InputMode::Search,
        }
        .render(search_area, buf);

        let page = editor.page_view();
        let table_focused = matches!(mode, InputMode::Table | InputMode::Editing);
        let rows = RosterTable {
            records: &page,
            genders: editor.genders(),
            selected: table_focused.then_some(state.selected),
            focused: table_focused,
            editing: editor.edit_session().map(|session| EditRow {
                id: session.id(),
                focus: session.focus(),
                name: &state.edit.name,
                age: &state.edit.age,
                gender: session.staged(Field::Gender),
                error: session.error(),
            }),
        }
        .render(table_area, buf);

        let pager = PaginationBar {
            current_page: editor.current_page(),
            page_count: editor.page_count(),
        }
        .render(pager_area, buf);
        drop(page);

        StatusLine::new(state.status.as_ref()).render(status_area, buf);
        GlobalFooter::for_mode(mode, &self.config.keybindings).render(footer_area, buf);

        let cursor: Option<Position> = match mode {
            InputMode::Form => form.cursor,
            InputMode::Search => search_cursor,
            InputMode::Editing => rows.cursor,
            InputMode::Table => None,
        };

        match rows.edit_row.clone() {
            Some((row, cells)) => state.editor.set_edit_bounds(Some(row), cells),
            None => state.editor.set_edit_bounds(None, Vec::new()),
        }
        state.regions.form = form;
        state.regions.search = Some(search_input);
        state.regions.table = table_area;
        state.regions.rows = rows;
        state.regions.pager = pager;

        if let Some(position) = cursor {
            f.set_cursor_position(position);
        }
    }
}
