//! Shift value repair.
//!
//! Spreadsheet tools coerce some shift tokens into other types before the
//! grid ever reaches us: the half shift `1/2` is stored as the number `0.5`,
//! and `2/3` is read as the date February 3rd. This module undoes both.

use once_cell::sync::Lazy;
use regex::Regex;

/// An ISO date with an optional time of day, as a coerced `2/3` renders.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:\s+[0-9]{2}:[0-9]{2}:[0-9]{2})?$")
        .expect("ISO date pattern is valid")
});

/// Repairs a shift cell value.
///
/// Absent, blank, and `nan` values become `None`. `0.5` becomes `1/2`, and
/// any date on February 3rd becomes `2/3`. Everything else is returned
/// trimmed and otherwise unchanged. The function is total and idempotent.
///
/// # Examples
///
/// ```
/// use timesheet_payroll::extraction::normalize_shift_value;
///
/// assert_eq!(normalize_shift_value(Some("0.5")).as_deref(), Some("1/2"));
/// assert_eq!(normalize_shift_value(Some("2024-02-03")).as_deref(), Some("2/3"));
/// assert_eq!(normalize_shift_value(Some("2024-02-03 00:00:00")).as_deref(), Some("2/3"));
/// assert_eq!(normalize_shift_value(Some(" Д ")).as_deref(), Some("Д"));
/// assert_eq!(normalize_shift_value(Some("")), None);
/// assert_eq!(normalize_shift_value(Some("NaN")), None);
/// assert_eq!(normalize_shift_value(None), None);
/// ```
pub fn normalize_shift_value(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        return None;
    }

    if value == "0.5" {
        return Some("1/2".to_string());
    }

    if let Some(captures) = ISO_DATE.captures(value) {
        if &captures[2] == "02" && &captures[3] == "03" {
            return Some("2/3".to_string());
        }
    }

    Some(value.to_string())
}
