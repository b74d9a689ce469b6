//! FILENAME: core/report/src/document.rs
//!
//! Renders the filtered aggregates into a downloadable report workbook.
//! The layout mirrors the printed report: a header region reserved for the
//! department logo, a centered title and subtitle, a summary of the applied
//! filters, and one section per grouping dimension listing each group's
//! summed value.

use engine::{format_amount, AggregateResult, AggregateTable, FilterDimension, FilterState};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::error::ReportError;

pub const REPORT_TITLE: &str = "Relatório de Gastos - Apura SUS";
pub const REPORT_SUBTITLE: &str = "GABINETE DO SECRETÁRIO ADJUNTO DE GESTÃO HOSPITALAR";
pub const FILTER_SUMMARY_HEADING: &str = "Filtros selecionados:";

/// A4 paper, per the xlsx paper-size table.
const PAPER_A4: u8 = 9;

/// Rows reserved at the top of the sheet for the department logo, which is
/// placed by the hosting application at print time.
const LOGO_REGION_ROWS: u32 = 4;

const LABEL_COLUMN_WIDTH: f64 = 50.0;
const VALUE_COLUMN_WIDTH: f64 = 20.0;

/// The grouping dimensions that appear in the exported document. The
/// on-screen view also breaks spending down by subcategory; the printed
/// report never has.
const REPORT_SECTIONS: [engine::GroupDimension; 3] = [
    engine::GroupDimension::Category,
    engine::GroupDimension::Hospital,
    engine::GroupDimension::CostCenter,
];

/// Renders the report for the given aggregates and filter selections as
/// xlsx bytes. An empty filtered subset is not an error: the document is
/// produced with its sections present and zero group rows.
pub fn render_document(
    result: &AggregateResult,
    filters: &FilterState,
) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Relatório")?;
    worksheet.set_paper_size(PAPER_A4);
    worksheet.set_column_width(0, LABEL_COLUMN_WIDTH)?;
    worksheet.set_column_width(1, VALUE_COLUMN_WIDTH)?;

    let title_format = Format::new()
        .set_bold()
        .set_font_size(16.0)
        .set_align(FormatAlign::Center);
    let subtitle_format = Format::new()
        .set_bold()
        .set_font_size(12.0)
        .set_align(FormatAlign::Center);
    let section_format = Format::new().set_bold().set_font_size(14.0);
    let bold_format = Format::new().set_bold();

    let mut row = LOGO_REGION_ROWS;

    worksheet.write_string_with_format(row, 0, REPORT_TITLE, &title_format)?;
    row += 1;
    worksheet.write_string_with_format(row, 0, REPORT_SUBTITLE, &subtitle_format)?;
    row += 2;

    // Applied filters, one line per dimension with the selected values.
    worksheet.write_string_with_format(row, 0, FILTER_SUMMARY_HEADING, &bold_format)?;
    row += 1;
    for dimension in FilterDimension::ALL {
        let values: Vec<&str> = filters
            .selection(dimension)
            .iter()
            .map(String::as_str)
            .collect();
        let line = format!("{}: {}", dimension.label(), values.join(", "));
        worksheet.write_string(row, 0, &line)?;
        row += 1;
    }
    row += 1;

    for dimension in REPORT_SECTIONS {
        let heading = format!("Gastos por {}:", dimension.label());
        worksheet.write_string_with_format(row, 0, &heading, &section_format)?;
        row += 1;
        row = write_section_rows(worksheet, row, result.table(dimension))?;
        row += 1;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_section_rows(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    mut row: u32,
    table: &AggregateTable,
) -> Result<u32, ReportError> {
    for entry in table.entries() {
        worksheet.write_string(row, 0, &entry.label)?;
        worksheet.write_string(row, 1, &format!("R$ {}", format_amount(entry.sum)))?;
        row += 1;
    }
    Ok(row)
}

// ============================================================================
// Tests
// ============================================================================
