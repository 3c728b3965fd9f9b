//! Utility modules

pub mod paths;

pub use paths::{
    config_path, data_dir, default_export_dir, init_data_dir, log_file_path, logs_dir,
};
