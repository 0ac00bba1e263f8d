//! Daily attendance record model.

use serde::{Deserialize, Serialize};

use super::EmployeeKey;

/// One employee's attendance facts for one day slot.
///
/// All fields except the identity are kept as text; numeric interpretation
/// happens later and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The employee code.
    pub code: String,
    /// The employee name.
    pub name: String,
    /// Day of month from the day-number header row.
    pub day_of_month: Option<String>,
    /// Shift code after value repair.
    pub shift_code: Option<String>,
    /// Hours worked, raw.
    pub hours_worked: Option<String>,
    /// Weekday letter from the weekday header row.
    pub weekday_label: Option<String>,
}

impl DailyRecord {
    /// Returns the aggregation key of this record.
    pub fn key(&self) -> EmployeeKey {
        EmployeeKey::new(self.code.clone(), self.name.clone())
    }

    /// Returns the day of month as a number.
    ///
    /// Only plain ASCII digit strings count; anything else (absent, blank,
    /// `"5.0"`, `"-1"`) is day 0, which sorts first.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_payroll::models::DailyRecord;
    ///
    /// let mut record = DailyRecord {
    ///     code: "1".to_string(),
    ///     name: "A".to_string(),
    ///     day_of_month: Some("17".to_string()),
    ///     shift_code: None,
    ///     hours_worked: None,
    ///     weekday_label: None,
    /// };
    /// assert_eq!(record.day_number(), 17);
    ///
    /// record.day_of_month = Some("x".to_string());
    /// assert_eq!(record.day_number(), 0);
    /// ```
    pub fn day_number(&self) -> i64 {
        self.parsed_day().unwrap_or(0)
    }

    /// Returns the day of month if it is a plain digit string.
    pub fn parsed_day(&self) -> Option<i64> {
        self.day_of_month
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse().ok())
    }
}
