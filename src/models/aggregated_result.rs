//! Aggregated payroll result models.
//!
//! This module contains the [`AggregatedResult`] type holding one employee's
//! monthly totals, and the [`DayAudit`] entries that record how each day
//! contributed to them.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeKey, ShiftCode};

/// One employee's payroll totals for a workbook.
///
/// # Example
///
/// ```
/// use timesheet_payroll::models::AggregatedResult;
/// use rust_decimal::Decimal;
///
/// let result = AggregatedResult::empty("105", "Ana Petrova");
/// assert_eq!(result.total_hours, Decimal::ZERO);
/// assert!(result.is_reportable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// The employee code.
    pub code: String,
    /// The employee name.
    pub name: String,
    /// Worked hours, duty shifts excluded.
    pub total_hours: Decimal,
    /// Total hours minus the monthly threshold (may be negative).
    pub overtime: Decimal,
    /// Sunday work, including the Saturday credits.
    pub sunday_work: Decimal,
    /// Weekend credits on days that accrued overtime.
    pub overtime_sunday_work: Decimal,
    /// First shift hours.
    pub first_shift: Decimal,
    /// Second and third shift hours combined.
    pub second_third_shift: Decimal,
    /// Third shift hours.
    pub third_shift: Decimal,
    /// Duty hours on public holidays.
    pub holidays: Decimal,
    /// Duty hours.
    pub duty_hours: Decimal,
    /// Night-duty hours per duty.
    pub hours_per_duty: Decimal,
}

impl AggregatedResult {
    /// Creates a result with every metric at zero.
    pub fn empty(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            total_hours: Decimal::ZERO,
            overtime: Decimal::ZERO,
            sunday_work: Decimal::ZERO,
            overtime_sunday_work: Decimal::ZERO,
            first_shift: Decimal::ZERO,
            second_third_shift: Decimal::ZERO,
            third_shift: Decimal::ZERO,
            holidays: Decimal::ZERO,
            duty_hours: Decimal::ZERO,
            hours_per_duty: Decimal::ZERO,
        }
    }

    /// Returns the aggregation key of this result.
    pub fn key(&self) -> EmployeeKey {
        EmployeeKey::new(self.code.clone(), self.name.clone())
    }

    /// Returns true if the result belongs in the report (overtime >= 0).
    pub fn is_reportable(&self) -> bool {
        self.overtime >= Decimal::ZERO
    }
}

/// How one daily record was accounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAudit {
    /// Parsed day of month (0 when unparsable).
    pub day: i64,
    /// The weekday letter from the sheet, verbatim.
    pub weekday_label: Option<String>,
    /// The weekday resolved from the employee's anchor.
    pub weekday: Weekday,
    /// The shift token, verbatim.
    pub shift_token: Option<String>,
    /// The classified shift code.
    pub shift_code: ShiftCode,
    /// Hours parsed from the hours cell.
    pub hours_worked: Decimal,
    /// Hours of this day past the monthly threshold.
    pub overtime_today: Decimal,
    /// Threshold-counted hours after this day.
    pub cumulative_hours: Decimal,
    /// Human-readable credit notes.
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_result_is_all_zero() {
        let result = AggregatedResult::empty("1", "A");
        assert_eq!(result.key(), EmployeeKey::new("1", "A"));
        for value in [
            result.total_hours,
            result.overtime,
            result.sunday_work,
            result.overtime_sunday_work,
            result.first_shift,
            result.second_third_shift,
            result.third_shift,
            result.holidays,
            result.duty_hours,
            result.hours_per_duty,
        ] {
            assert_eq!(value, Decimal::ZERO);
        }
    }

    #[test]
    fn test_reportable_boundary() {
        let mut result = AggregatedResult::empty("1", "A");
        result.overtime = dec("-0.5");
        assert!(!result.is_reportable());
        result.overtime = dec("0");
        assert!(result.is_reportable());
        result.overtime = dec("12");
        assert!(result.is_reportable());
    }

    #[test]
    fn test_serialization_uses_snake_case_fields() {
        let mut result = AggregatedResult::empty("12", "John");
        result.total_hours = dec("168");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_hours"], "168");
        assert_eq!(json["second_third_shift"], "0");
        assert_eq!(json["hours_per_duty"], "0");
    }

    #[test]
    fn test_day_audit_serializes_weekday_and_code() {
        let audit = DayAudit {
            day: 7,
            weekday_label: Some("Н".to_string()),
            weekday: Weekday::Sun,
            shift_token: Some("1/2/3".to_string()),
            shift_code: ShiftCode::RoundTheClock,
            hours_worked: dec("24"),
            overtime_today: dec("0"),
            cumulative_hours: dec("24"),
            notes: vec![],
        };
        let json = serde_json::to_value(&audit).unwrap();
        assert_eq!(json["weekday"], "Sun");
        assert_eq!(json["shift_code"], "round_the_clock");
    }
}
