//! FILENAME: core/loader/src/lib.rs
//!
//! Data ingestion for the spending dashboard. Reads hospital spending
//! records from CSV or Excel files and normalizes them into an
//! `engine::Dataset`, coercing dates to "YYYY-MM" month labels and
//! monetary values to floats.

mod csv_reader;
mod error;
mod normalize;
mod xlsx_reader;

use std::path::Path;

pub use csv_reader::load_csv;
pub use error::LoaderError;
pub use xlsx_reader::load_xlsx;

use engine::Dataset;

/// Loads a dataset from a file, dispatching on the file extension.
/// Supported extensions (case-insensitive): .csv, .xlsx, .xls.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoaderError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => load_csv(path),
        "xlsx" | "xls" => load_xlsx(path),
        _ => Err(LoaderError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
