mod button;
mod form_panel;
mod global_footer;
mod key_hints;
mod pagination_bar;
mod roster_table;
mod search_box;
mod status_line;
mod text_input;
pub mod theme;

pub use button::draw_button;
pub use form_panel::{choice_text, FormPanel, FormRegions, ADD_BUTTON_LABEL, FORM_HEIGHT};
pub use global_footer::GlobalFooter;
pub use key_hints::render_key_hints;
pub use pagination_bar::{PagerHit, PagerRegions, PaginationBar, EXPORT_LABEL};
pub use roster_table::{
    EditRow, RosterTable, RowButton, RowRegions, TableRegions, EMPTY_TABLE_TEXT,
};
pub use search_box::{SearchBox, SEARCH_HEIGHT};
pub use status_line::{StatusKind, StatusLine, StatusMessage, STATUS_TTL_TICKS};
pub use text_input::TextInputState;
