//! Report assembly.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::models::AggregatedResult;

/// The report header, in output order.
pub const REPORT_COLUMNS: [&str; 12] = [
    "Code",
    "Full Name",
    "Total Worked Hours",
    "First Shift",
    "Second+Third Shift",
    "Third Shift",
    "Night-Duty Hours-per-Duty",
    "Holiday Duty",
    "Duty",
    "Sunday Work",
    "Overtime Sunday Work",
    "Overtime",
];

/// One cell of a report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportCell {
    /// Code or name.
    Text(String),
    /// An hours metric.
    Hours(Decimal),
}

/// The final payroll table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollReport {
    /// Column headers; always [`REPORT_COLUMNS`].
    pub columns: [&'static str; 12],
    /// Retained employees in first-seen order.
    pub employees: Vec<AggregatedResult>,
    /// Number of employees left out for negative overtime.
    pub excluded: usize,
}

impl PayrollReport {
    /// Returns the number of report rows.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employee was retained.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the report rows as cells, aligned with [`REPORT_COLUMNS`].
    pub fn rows(&self) -> Vec<[ReportCell; 12]> {
        self.employees.iter().map(row_cells).collect()
    }
}

fn row_cells(result: &AggregatedResult) -> [ReportCell; 12] {
    [
        ReportCell::Text(result.code.clone()),
        ReportCell::Text(result.name.clone()),
        ReportCell::Hours(result.total_hours),
        ReportCell::Hours(result.first_shift),
        ReportCell::Hours(result.second_third_shift),
        ReportCell::Hours(result.third_shift),
        ReportCell::Hours(result.hours_per_duty),
        ReportCell::Hours(result.holidays),
        ReportCell::Hours(result.duty_hours),
        ReportCell::Hours(result.sunday_work),
        ReportCell::Hours(result.overtime_sunday_work),
        ReportCell::Hours(result.overtime),
    ]
}

/// Keeps the results with non-negative overtime, preserving their order.
///
/// # Example
///
/// ```
/// use timesheet_payroll::models::AggregatedResult;
/// use timesheet_payroll::report::assemble_report;
/// use rust_decimal::Decimal;
///
/// let mut short = AggregatedResult::empty("1", "Short");
/// short.overtime = Decimal::from(-8);
/// let exact = AggregatedResult::empty("2", "Exact");
///
/// let report = assemble_report(vec![short, exact]);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.employees[0].code, "2");
/// assert_eq!(report.excluded, 1);
/// ```
pub fn assemble_report(results: Vec<AggregatedResult>) -> PayrollReport {
    let total = results.len();
    let employees: Vec<AggregatedResult> =
        results.into_iter().filter(|r| r.is_reportable()).collect();
    let excluded = total - employees.len();

    info!(
        retained = employees.len(),
        excluded, "Assembled payroll report"
    );

    PayrollReport {
        columns: REPORT_COLUMNS,
        employees,
        excluded,
    }
}
