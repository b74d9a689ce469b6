//! FILENAME: core/loader/src/csv_reader.rs
//!
//! Reads spending records from a CSV file.

use std::path::Path;

use engine::{Dataset, Record};

use crate::error::LoaderError;
use crate::normalize::{parse_month_label, parse_value, ColumnMap};

/// Loads a dataset from a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Dataset, LoaderError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |index: usize| row.get(index).unwrap_or("").trim();

        records.push(Record {
            date: parse_month_label(cell(columns.date)),
            hospital: cell(columns.hospital).to_string(),
            cost_center: cell(columns.cost_center).to_string(),
            category: cell(columns.category).to_string(),
            subcategory: cell(columns.subcategory).to_string(),
            value: parse_value(cell(columns.value)),
        });
    }

    Ok(Dataset::from_records(records))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv_basic() {
        let file = write_csv(
            "Data,Hospital,Centro de Custo,Categoria,Subcategoria,Valor\n\
             2024-01-10,Hospital A,UTI,Medicamentos,Antibioticos,150.50\n\
             2024-02-05,Hospital B,Enfermaria,Insumos,Luvas,75.25\n",
        );

        let dataset = load_csv(file.path()).unwrap();
        assert_eq!(dataset.records().len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.date.as_deref(), Some("2024-01"));
        assert_eq!(first.hospital, "Hospital A");
        assert_eq!(first.cost_center, "UTI");
        assert_eq!(first.category, "Medicamentos");
        assert_eq!(first.subcategory, "Antibioticos");
        assert_eq!(first.value, Some(150.5));

        assert_eq!(dataset.domains().dates, vec!["2024-01", "2024-02"]);
        assert_eq!(dataset.domains().hospitals, vec!["Hospital A", "Hospital B"]);
    }

    #[test]
    fn test_load_csv_bad_cells_become_none() {
        let file = write_csv(
            "Data,Hospital,Centro de Custo,Categoria,Subcategoria,Valor\n\
             not-a-date,Hospital A,UTI,Medicamentos,Antibioticos,abc\n",
        );

        let dataset = load_csv(file.path()).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.date, None);
        assert_eq!(record.value, None);
        // Rows without a parseable date contribute no date domain value.
        assert!(dataset.domains().dates.is_empty());
    }

    #[test]
    fn test_load_csv_missing_column() {
        let file = write_csv("Data,Hospital,Valor\n2024-01-10,Hospital A,10\n");

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(_)));
    }
}
