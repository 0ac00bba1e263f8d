//! End-to-end processing of a workbook.
//!
//! Sheets are scanned independently and their records concatenated; records
//! are then grouped by employee across sheets, aggregated, and filtered into
//! the report.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::calculation::{aggregate_employee, group_by_employee};
use crate::config::{ConfigLoader, SheetLayout};
use crate::error::{EngineError, EngineResult};
use crate::extraction::{build_records, extract_blocks};
use crate::models::{AggregatedResult, DailyRecord, Sheet};
use crate::report::{PayrollReport, assemble_report};
use crate::workbook::GridSource;

/// Extraction counts for one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    /// The sheet name.
    pub name: String,
    /// Employee blocks found on the sheet.
    pub blocks: usize,
    /// Daily records built from those blocks.
    pub records: usize,
}

/// Everything extracted from a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookExtraction {
    /// Per-sheet counts, in workbook order.
    pub sheets: Vec<SheetSummary>,
    /// Total employee blocks across all sheets.
    pub blocks_found: usize,
    /// All daily records, sheet by sheet.
    pub records: Vec<DailyRecord>,
}

/// The outcome of processing a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// The filtered report.
    pub report: PayrollReport,
    /// Total employee blocks across all sheets.
    pub blocks_found: usize,
    /// Total daily records extracted.
    pub records_extracted: usize,
}

/// Extracts the daily records of already decoded sheets.
pub fn extract_sheets(sheets: &[Sheet], layout: &SheetLayout) -> WorkbookExtraction {
    let mut summaries = Vec::with_capacity(sheets.len());
    let mut records = Vec::new();
    let mut blocks_found = 0;

    for sheet in sheets {
        let blocks = extract_blocks(&sheet.grid, &sheet.name, layout);
        let sheet_records = build_records(&sheet.grid, &blocks, layout);

        info!(
            sheet = %sheet.name,
            blocks = blocks.len(),
            records = sheet_records.len(),
            "Extracted sheet"
        );
        if !blocks.is_empty() && sheet_records.is_empty() {
            warn!(sheet = %sheet.name, "Employee blocks found but no daily records built");
        }

        blocks_found += blocks.len();
        summaries.push(SheetSummary {
            name: sheet.name.clone(),
            blocks: blocks.len(),
            records: sheet_records.len(),
        });
        records.extend(sheet_records);
    }

    WorkbookExtraction {
        sheets: summaries,
        blocks_found,
        records,
    }
}

/// Reads every sheet of a workbook and extracts its daily records.
///
/// # Errors
///
/// Returns [`EngineError::WorkbookRead`] if the source cannot be decoded.
pub fn extract_workbook<S>(source: &mut S, config: &ConfigLoader) -> EngineResult<WorkbookExtraction>
where
    S: GridSource + ?Sized,
{
    let sheets = source.sheets()?;
    Ok(extract_sheets(&sheets, config.layout()))
}

/// Groups records by employee and aggregates each group.
pub fn aggregate_records(
    records: Vec<DailyRecord>,
    monthly_hours: Decimal,
    layout: &SheetLayout,
) -> Vec<AggregatedResult> {
    group_by_employee(records)
        .into_iter()
        .map(|group| aggregate_employee(&group.records, monthly_hours, &layout.anchor_letters).result)
        .collect()
}

/// Processes already decoded sheets into a report.
///
/// # Errors
///
/// Returns [`EngineError::NoEmployeeData`] if no sheet contains an employee
/// block.
pub fn process_sheets(
    sheets: &[Sheet],
    monthly_hours: Decimal,
    config: &ConfigLoader,
) -> EngineResult<ProcessOutcome> {
    let extraction = extract_sheets(sheets, config.layout());
    finish(extraction, monthly_hours, config.layout())
}

/// Processes a workbook into a report.
///
/// # Errors
///
/// Returns [`EngineError::WorkbookRead`] if the source cannot be decoded and
/// [`EngineError::NoEmployeeData`] if no sheet contains an employee block.
///
/// # Example
///
/// ```
/// use timesheet_payroll::config::ConfigLoader;
/// use timesheet_payroll::models::{Grid, Sheet};
/// use timesheet_payroll::pipeline::process_workbook;
/// use timesheet_payroll::workbook::InMemoryWorkbook;
/// use rust_decimal::Decimal;
///
/// let grid = Grid::from_strs(&[
///     &[], &[], &[], &[],
///     &["", "", "", "П", "В"],
///     &["", "", "", "1", "2"],
///     &["12", "John", "смени", "1", "1"],
///     &["", "", "р.час", "8", "8"],
/// ]);
/// let mut workbook = InMemoryWorkbook::new(vec![Sheet::new("Jan", grid)]);
///
/// let outcome = process_workbook(&mut workbook, Decimal::from(16), &ConfigLoader::default())?;
/// assert_eq!(outcome.report.employees[0].total_hours, Decimal::from(16));
/// assert_eq!(outcome.records_extracted, 2);
/// # Ok::<(), timesheet_payroll::error::EngineError>(())
/// ```
pub fn process_workbook<S>(
    source: &mut S,
    monthly_hours: Decimal,
    config: &ConfigLoader,
) -> EngineResult<ProcessOutcome>
where
    S: GridSource + ?Sized,
{
    let extraction = extract_workbook(source, config)?;
    finish(extraction, monthly_hours, config.layout())
}

fn finish(
    extraction: WorkbookExtraction,
    monthly_hours: Decimal,
    layout: &SheetLayout,
) -> EngineResult<ProcessOutcome> {
    if extraction.blocks_found == 0 {
        warn!(sheets = extraction.sheets.len(), "No employee blocks in workbook");
        return Err(EngineError::NoEmployeeData);
    }

    let blocks_found = extraction.blocks_found;
    let records_extracted = extraction.records.len();
    let results = aggregate_records(extraction.records, monthly_hours, layout);

    info!(
        blocks_found,
        records_extracted,
        employees = results.len(),
        monthly_hours = %monthly_hours,
        "Aggregated workbook"
    );

    Ok(ProcessOutcome {
        report: assemble_report(results),
        blocks_found,
        records_extracted,
    })
}
