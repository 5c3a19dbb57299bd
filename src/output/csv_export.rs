//! CSV export
//!
//! Files are named `{prefix}_{YYYYmmdd_HHMMSS}.csv`. Two exports within the
//! same second would share a name, so an existing file is never overwritten:
//! the writer appends `_1`, `_2`, ... until the name is free.

use crate::output::{ExportError, ExportRow};
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Column names of the export file
pub const CSV_HEADERS: [&str; 3] = ["keyword", "volume", "search_results"];

/// Tries at most this many counter suffixes before giving up
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Returns the file name for an export taken at `now`
///
/// `attempt` 0 is the plain timestamped name; higher values add a counter.
pub fn export_file_name(prefix: &str, now: DateTime<Local>, attempt: u32) -> String {
    let stamp = now.format("%Y%m%d_%H%M%S");
    if attempt == 0 {
        format!("{}_{}.csv", prefix, stamp)
    } else {
        format!("{}_{}_{}.csv", prefix, stamp, attempt)
    }
}

/// Renders rows as CSV bytes, header included
pub fn render_csv(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record([&row.keyword, &row.popularity, &row.clusters])?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Writes rows to a new CSV file in `directory`
///
/// Zero rows still produce a file holding just the header.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the created file
/// * `Err(ExportError)` - The file could not be created or written
pub fn write_csv(
    rows: &[ExportRow],
    directory: &Path,
    prefix: &str,
    now: DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    let bytes = render_csv(rows)?;
    std::fs::create_dir_all(directory)?;

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let path = directory.join(export_file_name(prefix, now, attempt));

        // Taken names fall through to the next counter suffix
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        };

        file.write_all(&bytes)?;
        file.flush()?;
        tracing::info!("Exported {} rows to {}", rows.len(), path.display());
        return Ok(path);
    }

    Err(ExportError::Io(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free export file name for prefix '{}'", prefix),
    )))
}
