//! CSV export of the full roster.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use csv::Writer;

use crate::model::Record;

/// Column order of exported files.
pub const CSV_HEADER: [&str; 4] = ["id", "name", "gender", "age"];

/// Prefix of every export file name.
pub const EXPORT_FILE_PREFIX: &str = "userdata_";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Where an export was written and how many data rows it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Write a header row plus one row per record. Returns the data row count.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<usize, ExportError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for record in records {
        let id = record.id.to_string();
        let age = record.age.to_string();
        csv.write_record([
            id.as_str(),
            record.name.as_str(),
            record.gender.as_str(),
            age.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(records.len())
}

/// Render records as a CSV document in memory.
pub fn to_csv_string(records: &[Record]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// `userdata_<timestamp>.csv`, using a file-system safe timestamp.
pub fn export_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.csv",
        EXPORT_FILE_PREFIX,
        now.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Write the export file into `dir`, creating the directory if needed.
pub fn export_to_dir<Tz: TimeZone>(
    records: &[Record],
    dir: &Path,
    now: &DateTime<Tz>,
) -> Result<ExportSummary, ExportError>
where
    Tz::Offset: std::fmt::Display,
{
    fs::create_dir_all(dir)?;
    let (path, file) = create_unique(dir, &export_filename(now))?;
    let rows = write_csv(records, io::BufWriter::new(file))?;

    tracing::info!(path = %path.display(), rows, "Exported roster to CSV");

    Ok(ExportSummary { path, rows })
}

/// Create `name` in `dir` without touching existing files. Taken names get
/// a `_1`, `_2`, ... suffix before the extension.
fn create_unique(dir: &Path, name: &str) -> Result<(PathBuf, File), ExportError> {
    let stem = name.strip_suffix(".csv").unwrap_or(name);
    let mut suffix = 0u32;
    loop {
        let path = if suffix == 0 {
            dir.join(name)
        } else {
            dir.join(format!("{stem}_{suffix}.csv"))
        };
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "Export file exists, trying next name");
                suffix += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
