pub mod config;
pub mod draft;
pub mod edit;
pub mod editor;
pub mod export;
pub mod model;
pub mod ui;
pub mod util;
pub mod view;

pub use config::{Config, ConfigError, EXAMPLE_CONFIG};
pub use draft::{Field, FieldErrors, FormDraft, ValidationError};
pub use edit::{EditSession, RowHit};
pub use editor::{EditorError, EditorSettings, PointerOutcome, RosterEditor};
pub use export::{export_filename, write_csv, ExportError, ExportSummary, CSV_HEADER};
pub use model::{GenderOption, GenderOptions, NewRecord, Record, RecordId};
pub use ui::App;
pub use view::{filter_records, page_count, page_slice, DEFAULT_PAGE_SIZE};
