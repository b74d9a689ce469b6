//! FILENAME: core/loader/src/xlsx_reader.rs
//!
//! Reads spending records from an Excel workbook. Both .xlsx and legacy
//! .xls files are handled through calamine's format auto-detection.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use engine::{Dataset, Record};

use crate::error::LoaderError;
use crate::normalize::{parse_month_label, parse_value, ColumnMap};

/// Loads a dataset from the first worksheet of an Excel workbook.
pub fn load_xlsx(path: &Path) -> Result<Dataset, LoaderError> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoaderError::InvalidFormat("workbook has no worksheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    parse_range(&range)
}

fn parse_range(range: &Range<Data>) -> Result<Dataset, LoaderError> {
    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| LoaderError::InvalidFormat("worksheet is empty".to_string()))?;

    let headers: Vec<String> = header_row.iter().map(cell_text).collect();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for row in rows {
        let cell = |index: usize| row.get(index).unwrap_or(&Data::Empty);

        records.push(Record {
            date: cell_month_label(cell(columns.date)),
            hospital: cell_text(cell(columns.hospital)),
            cost_center: cell_text(cell(columns.cost_center)),
            category: cell_text(cell(columns.category)),
            subcategory: cell_text(cell(columns.subcategory)),
            value: cell_value(cell(columns.value)),
        });
    }

    Ok(Dataset::from_records(records))
}

// ============================================================================
// Cell coercion
// ============================================================================

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format!("{}", f),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Date cells may be native Excel datetimes or text in any of the
/// accepted textual formats.
fn cell_month_label(cell: &Data) -> Option<String> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.format("%Y-%m").to_string()),
        Data::DateTimeIso(s) => parse_month_label(s),
        Data::String(s) => parse_month_label(s),
        _ => None,
    }
}

fn cell_value(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => parse_value(s),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
