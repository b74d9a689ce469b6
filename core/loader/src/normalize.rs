//! FILENAME: core/loader/src/normalize.rs
//!
//! Shared row normalization for the CSV and spreadsheet readers.
//! Maps source column headers to record fields, coerces dates to the
//! canonical "YYYY-MM" month label, and parses monetary values.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::LoaderError;

// ============================================================================
// Column headers
// ============================================================================

pub(crate) const COL_DATE: &str = "Data";
pub(crate) const COL_HOSPITAL: &str = "Hospital";
pub(crate) const COL_COST_CENTER: &str = "Centro de Custo";
pub(crate) const COL_CATEGORY: &str = "Categoria";
pub(crate) const COL_SUBCATEGORY: &str = "Subcategoria";
pub(crate) const COL_VALUE: &str = "Valor";

/// Column indices for the six required source columns.
#[derive(Debug)]
pub(crate) struct ColumnMap {
    pub date: usize,
    pub hospital: usize,
    pub cost_center: usize,
    pub category: usize,
    pub subcategory: usize,
    pub value: usize,
}

impl ColumnMap {
    /// Resolves the required columns against a header row. Header cells are
    /// matched after trimming surrounding whitespace.
    pub fn resolve(headers: &[String]) -> Result<Self, LoaderError> {
        let find = |name: &str| -> Result<usize, LoaderError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
        };
        Ok(ColumnMap {
            date: find(COL_DATE)?,
            hospital: find(COL_HOSPITAL)?,
            cost_center: find(COL_COST_CENTER)?,
            category: find(COL_CATEGORY)?,
            subcategory: find(COL_SUBCATEGORY)?,
            value: find(COL_VALUE)?,
        })
    }
}

// ============================================================================
// Field coercion
// ============================================================================

/// Parses a textual date cell into the canonical "YYYY-MM" month label.
/// Accepts ISO dates and datetimes, day-first Brazilian dates, and bare
/// month labels. Returns `None` for anything unparseable.
pub(crate) fn parse_month_label(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.format("%Y-%m").to_string());
        }
    }

    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.format("%Y-%m").to_string());
        }
    }

    // Bare "YYYY-MM" labels round-trip through a synthetic first-of-month.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return Some(date.format("%Y-%m").to_string());
    }

    None
}

/// Parses a monetary value cell. Unparseable or blank cells become `None`
/// so the row still participates in grouping with a zero contribution.
pub(crate) fn parse_value(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

// ============================================================================
// Tests
// ============================================================================
