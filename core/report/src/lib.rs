//! FILENAME: core/report/src/lib.rs
//!
//! Document export for the spending dashboard. Renders the currently
//! filtered aggregates into a downloadable report workbook; filename and
//! transport are the hosting application's concern.

mod document;
mod error;

pub use document::{render_document, FILTER_SUMMARY_HEADING, REPORT_SUBTITLE, REPORT_TITLE};
pub use error::ReportError;
