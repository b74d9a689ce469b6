//! FILENAME: core/report/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),
}
