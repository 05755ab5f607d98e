//! CSV export of the operations table.
//!
//! Serializes the currently visible, ordered operations as an RFC-4180
//! delimited text document: header row of column labels, one row per record,
//! cells produced by the same projection as the on-screen table. Quoting is
//! handled by the `csv` crate, so a parsed export reproduces the exact logical
//! grid that was written.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::domain::OperationRecord;
use crate::table::{COLUMNS, project_cell};

// ============================================================================
// Errors
// ============================================================================

/// Failure modes of the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export file could not be written: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

// ============================================================================
// Serialization
// ============================================================================

/// Serializes operations to delimited text in column order.
///
/// Row order follows the input slice, which the caller keeps in the currently
/// sorted display order. Cells containing commas, quotes, or newlines are
/// quoted with internal quotes doubled; all other cells stay unquoted.
pub fn operations_to_csv(records: &[OperationRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(COLUMNS.iter().map(|spec| spec.label))?;
    for record in records {
        writer.write_record(COLUMNS.iter().map(|spec| project_cell(record, spec.key)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

/// Builds the timestamped export filename.
#[must_use]
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("unit_operations_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Writes the export document next to the working directory, falling back to
/// the home directory when the working directory is not writable.
///
/// Returns the path the file was written to.
pub fn write_export(records: &[OperationRecord]) -> Result<PathBuf, ExportError> {
    let csv_text = operations_to_csv(records)?;
    let filename = export_filename(Local::now());

    let path = PathBuf::from(&filename);
    match std::fs::write(&path, &csv_text) {
        Ok(()) => Ok(path),
        Err(err) => {
            if let Some(home) = dirs::home_dir() {
                let home_path = home.join(&filename);
                if std::fs::write(&home_path, &csv_text).is_ok() {
                    return Ok(home_path);
                }
            }
            Err(err.into())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
