//! Hour value parsing.
//!
//! Hours cells are free text. [`parse_hours`] is total and maps anything it
//! cannot read to zero; [`parse_monthly_hours`] is the strict variant used to
//! validate the caller's threshold.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::trace;

use crate::error::{EngineError, EngineResult};

fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Parses an hours cell, returning zero for anything unreadable.
///
/// # Examples
///
/// ```
/// use timesheet_payroll::calculation::parse_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_hours(Some(" 8 ")), Decimal::from(8));
/// assert_eq!(parse_hours(Some("7.5")), Decimal::from_str("7.5").unwrap());
/// assert_eq!(parse_hours(Some("1.2e1")), Decimal::from(12));
/// assert_eq!(parse_hours(Some("nan")), Decimal::ZERO);
/// assert_eq!(parse_hours(Some("осум")), Decimal::ZERO);
/// assert_eq!(parse_hours(None), Decimal::ZERO);
/// ```
pub fn parse_hours(value: Option<&str>) -> Decimal {
    let Some(raw) = value else {
        trace!("hours value missing, using 0");
        return Decimal::ZERO;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        trace!(value = raw, "hours value blank, using 0");
        return Decimal::ZERO;
    }

    parse_decimal(trimmed).unwrap_or_else(|| {
        trace!(value = raw, "hours value unreadable, using 0");
        Decimal::ZERO
    })
}

/// Parses the monthly hours threshold supplied by the caller.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonthlyHours`] if the input is not a
/// decimal or scientific number.
///
/// # Example
///
/// ```
/// use timesheet_payroll::calculation::parse_monthly_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_monthly_hours(" 160 ").unwrap(), Decimal::from(160));
/// assert!(parse_monthly_hours("160h").is_err());
/// ```
pub fn parse_monthly_hours(input: &str) -> EngineResult<Decimal> {
    parse_decimal(input.trim()).ok_or_else(|| EngineError::InvalidMonthlyHours {
        input: input.to_string(),
    })
}
