//! XLSX serialisation of the payroll report.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use crate::error::EngineResult;

use super::{PayrollReport, ReportCell};

/// Name of the single worksheet in the output workbook.
pub const RESULTS_SHEET_NAME: &str = "Results";

/// Column widths, in characters, aligned with the report columns.
pub const COLUMN_WIDTHS: [f64; 12] = [
    12.0, 24.0, 18.0, 12.0, 24.0, 12.0, 28.0, 18.0, 12.0, 18.0, 22.0, 18.0,
];

/// Writes the report as an XLSX workbook and returns its bytes.
///
/// Code and name are written as text and every metric as a number, so the
/// sheet can be summed without conversion.
///
/// # Errors
///
/// Returns [`EngineError::ReportWrite`](crate::error::EngineError::ReportWrite)
/// if the workbook cannot be serialised.
pub fn write_xlsx(report: &PayrollReport) -> EngineResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(RESULTS_SHEET_NAME)?;

    for (column, (title, width)) in report.columns.iter().zip(COLUMN_WIDTHS).enumerate() {
        let column = column as u16;
        worksheet.set_column_width(column, width)?;
        worksheet.write_string_with_format(0, column, *title, &header)?;
    }

    for (index, cells) in report.rows().iter().enumerate() {
        let row = index as u32 + 1;
        for (column, cell) in cells.iter().enumerate() {
            let column = column as u16;
            match cell {
                ReportCell::Text(text) => {
                    worksheet.write_string(row, column, text)?;
                }
                ReportCell::Hours(hours) => {
                    worksheet.write_number(row, column, hours_to_f64(*hours))?;
                }
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(rows = report.len(), bytes = bytes.len(), "Wrote XLSX report");
    Ok(bytes)
}

fn hours_to_f64(hours: Decimal) -> f64 {
    hours.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AggregatedResult;
    use crate::report::assemble_report;
    use crate::workbook::{CalamineWorkbook, GridSource};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_written_report_reads_back() {
        let mut result = AggregatedResult::empty("12", "John");
        result.total_hours = dec("167.5");
        result.overtime = dec("7.5");
        let report = assemble_report(vec![result]);

        let bytes = write_xlsx(&report).unwrap();
        let sheets = CalamineWorkbook::from_bytes(bytes).unwrap().sheets().unwrap();

        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name, RESULTS_SHEET_NAME);
        let grid = &sheets[0].grid;
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.text(0, 0), Some("Code"));
        assert_eq!(grid.text(0, 11), Some("Overtime"));
        assert_eq!(grid.text(1, 0), Some("12"));
        assert_eq!(grid.text(1, 1), Some("John"));
        assert_eq!(grid.text(1, 2), Some("167.5"));
        assert_eq!(grid.text(1, 3), Some("0"));
        assert_eq!(grid.text(1, 11), Some("7.5"));
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let bytes = write_xlsx(&assemble_report(vec![])).unwrap();
        let sheets = CalamineWorkbook::from_bytes(bytes).unwrap().sheets().unwrap();
        assert_eq!(sheets[0].grid.len(), 1);
        assert_eq!(sheets[0].grid.text(0, 1), Some("Full Name"));
    }

    #[test]
    fn test_hours_conversion() {
        assert_eq!(hours_to_f64(dec("7.25")), 7.25);
        assert_eq!(hours_to_f64(dec("-12")), -12.0);
    }
}
