//! Path utilities for the roster data directory

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for a custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.roster location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        tracing::debug!(path = %path.display(), "Data directory already initialized");
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".roster"))
        .unwrap_or_else(|| PathBuf::from(".roster"))
}

/// The data directory: the custom path if set via init_data_dir(), otherwise ~/.roster
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// ~/.roster/logs
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// ~/.roster/logs/roster.log
pub fn log_file_path() -> PathBuf {
    logs_dir().join("roster.log")
}

/// ~/.roster/config.toml
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// The user's Downloads directory, or ~/.roster/exports when there is none.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| data_dir().join("exports"))
}
