//! Monthly overtime detection functionality.
//!
//! Overtime is measured against a monthly threshold, not a daily one. Days
//! are counted in order; the day on which the running total crosses the
//! threshold contributes only its excess, and every later day is overtime in
//! full.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The split of one day's hours around the monthly threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOvertimeSplit {
    /// Hours that fell within the threshold.
    pub regular_hours: Decimal,
    /// Hours that fell past the threshold.
    pub overtime_hours: Decimal,
}

/// Splits a day's hours given the hours already counted this month.
///
/// # Arguments
///
/// * `cumulative_hours` - Hours counted toward the threshold before this day
/// * `worked_hours` - Hours worked on this day
/// * `threshold` - The monthly hours threshold
///
/// # Examples
///
/// ## Below the threshold
///
/// ```
/// use timesheet_payroll::calculation::detect_monthly_overtime;
/// use rust_decimal::Decimal;
///
/// let split = detect_monthly_overtime(Decimal::from(100), Decimal::from(8), Decimal::from(160));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Crossing the threshold
///
/// ```
/// use timesheet_payroll::calculation::detect_monthly_overtime;
/// use rust_decimal::Decimal;
///
/// let split = detect_monthly_overtime(Decimal::from(156), Decimal::from(8), Decimal::from(160));
/// assert_eq!(split.regular_hours, Decimal::from(4));
/// assert_eq!(split.overtime_hours, Decimal::from(4));
/// ```
///
/// ## Already past the threshold
///
/// ```
/// use timesheet_payroll::calculation::detect_monthly_overtime;
/// use rust_decimal::Decimal;
///
/// let split = detect_monthly_overtime(Decimal::from(160), Decimal::from(8), Decimal::from(160));
/// assert_eq!(split.overtime_hours, Decimal::from(8));
/// ```
pub fn detect_monthly_overtime(
    cumulative_hours: Decimal,
    worked_hours: Decimal,
    threshold: Decimal,
) -> MonthlyOvertimeSplit {
    let reached = cumulative_hours.saturating_add(worked_hours);
    let overtime_hours = if cumulative_hours >= threshold {
        worked_hours
    } else if reached > threshold {
        reached.saturating_sub(threshold)
    } else {
        Decimal::ZERO
    };

    MonthlyOvertimeSplit {
        regular_hours: worked_hours.saturating_sub(overtime_hours),
        overtime_hours,
    }
}
