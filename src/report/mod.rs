//! Report assembly and serialisation.
//!
//! The report is a fixed 12-column table with one row per employee whose
//! overtime is not negative. [`assemble_report`] builds it from the
//! aggregated results and [`write_xlsx`] turns it into a workbook.

mod assembler;
mod xlsx;

pub use assembler::{PayrollReport, REPORT_COLUMNS, ReportCell, assemble_report};
pub use xlsx::{COLUMN_WIDTHS, RESULTS_SHEET_NAME, write_xlsx};
