/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),
    /// Periodic tick for expiring status messages
    Tick,
}

/// Which part of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing into the add-record form
    #[default]
    Form,
    /// Typing into the search box
    Search,
    /// Navigating table rows
    Table,
    /// Editing a row inline
    Editing,
}

impl InputMode {
    /// Next pane for focus cycling. Editing is left through the table.
    pub fn next_pane(self) -> Self {
        match self {
            InputMode::Form => InputMode::Search,
            InputMode::Search => InputMode::Table,
            InputMode::Table | InputMode::Editing => InputMode::Form,
        }
    }
}
