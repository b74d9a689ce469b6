//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

use std::io::Write;

use app_lib::DashboardSession;
use engine::{Dataset, Record};

/// Test harness holding a session and, for file-based fixtures, the
/// temporary dataset file backing it.
pub struct TestHarness {
    pub session: DashboardSession,
    _fixture: Option<tempfile::NamedTempFile>,
}

impl TestHarness {
    /// Session over the two-record example dataset: Supplies 100 and
    /// Staff 300, same month, hospital and cost center.
    pub fn with_sample_data() -> Self {
        let dataset = Dataset::from_records(vec![
            sample_record("Supplies", 100.0),
            sample_record("Staff", 300.0),
        ]);
        TestHarness {
            session: DashboardSession::new(dataset),
            _fixture: None,
        }
    }

    /// Session loaded through the CSV path, exercising the loader too.
    pub fn with_sample_csv() -> Self {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(
            b"Data,Hospital,Centro de Custo,Categoria,Subcategoria,Valor\n\
              2024-01-15,A,X,Supplies,Geral,100\n\
              2024-01-15,A,X,Staff,Geral,300\n",
        )
        .unwrap();
        file.flush().unwrap();

        let session = DashboardSession::open(file.path()).unwrap();
        TestHarness {
            session,
            _fixture: Some(file),
        }
    }
}

pub fn sample_record(category: &str, value: f64) -> Record {
    Record {
        date: Some("2024-01".to_string()),
        hospital: "A".to_string(),
        cost_center: "X".to_string(),
        category: category.to_string(),
        subcategory: "Geral".to_string(),
        value: Some(value),
    }
}

/// Record with every dimension spelled out, for multi-domain fixtures.
pub fn record(
    date: &str,
    hospital: &str,
    cost_center: &str,
    category: &str,
    value: f64,
) -> Record {
    Record {
        date: Some(date.to_string()),
        hospital: hospital.to_string(),
        cost_center: cost_center.to_string(),
        category: category.to_string(),
        subcategory: "Geral".to_string(),
        value: Some(value),
    }
}
