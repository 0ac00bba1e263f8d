//! Per-employee payroll aggregation.
//!
//! This module runs the monthly accounting over one employee's daily
//! records. Records are processed in ascending day order because overtime
//! depends on the running total of hours counted so far. For each day:
//!
//! 1. The hours cell is parsed (unreadable values count as 0).
//! 2. The weekday is resolved from the employee's anchor.
//! 3. Non-duty hours are added to the total and split around the monthly
//!    threshold; duty hours are left out of both.
//! 4. Sunday and Saturday credits are booked as Sunday work.
//! 5. The shift-code rule credits the per-shift accumulators.
//! 6. Days with overtime that fall on a weekend earn the overtime weekend
//!    credit.
//!
//! The final overtime is the worked total minus the threshold.

use std::collections::HashMap;

use chrono::Weekday;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::{AnchorLetter, default_anchor_letters};
use crate::models::{
    AggregatedResult, Credit, DailyRecord, DayAudit, EmployeeKey, ShiftCode,
};

use super::{
    WeekdayAnchor, detect_monthly_overtime, parse_hours, resolve_anchor, weekday_name,
};

/// One employee's aggregated result together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAggregation {
    /// The aggregated totals.
    pub result: AggregatedResult,
    /// The weekday anchor used for the month.
    pub anchor: WeekdayAnchor,
    /// One entry per record, in processing order.
    pub days: Vec<DayAudit>,
}

/// The daily records of one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecords {
    /// The employee key shared by all records.
    pub key: EmployeeKey,
    /// The employee's records from every sheet, in extraction order.
    pub records: Vec<DailyRecord>,
}

/// Groups records by `(code, name)`, keeping the order in which employees
/// first appear.
///
/// # Example
///
/// ```
/// use timesheet_payroll::calculation::group_by_employee;
/// use timesheet_payroll::models::DailyRecord;
///
/// let record = |code: &str| DailyRecord {
///     code: code.to_string(),
///     name: "A".to_string(),
///     day_of_month: None,
///     shift_code: None,
///     hours_worked: None,
///     weekday_label: None,
/// };
/// let groups = group_by_employee(vec![record("2"), record("1"), record("2")]);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].key.code, "2");
/// assert_eq!(groups[0].records.len(), 2);
/// ```
pub fn group_by_employee(records: Vec<DailyRecord>) -> Vec<EmployeeRecords> {
    let mut groups: Vec<EmployeeRecords> = Vec::new();
    let mut index: HashMap<EmployeeKey, usize> = HashMap::new();

    for record in records {
        let key = record.key();
        match index.get(&key) {
            Some(&position) => groups[position].records.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(EmployeeRecords {
                    key,
                    records: vec![record],
                });
            }
        }
    }

    groups
}

/// Aggregates one employee's records with the default anchor letters.
///
/// # Example
///
/// ```
/// use timesheet_payroll::calculation::aggregate;
/// use timesheet_payroll::models::DailyRecord;
/// use rust_decimal::Decimal;
///
/// let records: Vec<DailyRecord> = (1..=3)
///     .map(|day| DailyRecord {
///         code: "12".to_string(),
///         name: "John".to_string(),
///         day_of_month: Some(day.to_string()),
///         shift_code: Some("1".to_string()),
///         hours_worked: Some("8".to_string()),
///         weekday_label: None,
///     })
///     .collect();
///
/// let result = aggregate(&records, Decimal::from(20));
/// assert_eq!(result.total_hours, Decimal::from(24));
/// assert_eq!(result.overtime, Decimal::from(4));
/// assert_eq!(result.first_shift, Decimal::from(24));
/// ```
pub fn aggregate(records: &[DailyRecord], monthly_hours: Decimal) -> AggregatedResult {
    aggregate_employee(records, monthly_hours, &default_anchor_letters()).result
}

/// Aggregates one employee's records and keeps the per-day audit trail.
///
/// `records` may be in any order; they are sorted by day number (unparsable
/// days first, ties in input order). The code and name come from the first
/// sorted record.
pub fn aggregate_employee(
    records: &[DailyRecord],
    monthly_hours: Decimal,
    anchors: &[AnchorLetter],
) -> EmployeeAggregation {
    let mut sorted: Vec<&DailyRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.day_number());

    let anchor = resolve_anchor(sorted.iter().copied(), anchors);
    let mut result = match sorted.first() {
        Some(first) => AggregatedResult::empty(first.code.clone(), first.name.clone()),
        None => AggregatedResult::empty("", ""),
    };

    info!(
        code = %result.code,
        name = %result.name,
        records = sorted.len(),
        anchor_day = anchor.day,
        anchor_weekday = %anchor.weekday,
        "Processing employee"
    );

    let mut cumulative_hours = Decimal::ZERO;
    let mut days = Vec::with_capacity(sorted.len());

    for record in sorted {
        let day = record.day_number();
        let weekday = anchor.weekday_of(day);
        let hours_worked = parse_hours(record.hours_worked.as_deref());
        let shift_code = ShiftCode::classify(record.shift_code.as_deref());
        let rule = shift_code.rule();
        let mut notes = Vec::new();

        let overtime_today = if rule.duty {
            notes.push("duty: excluded from total and overtime".to_string());
            Decimal::ZERO
        } else {
            result.total_hours = result.total_hours.saturating_add(hours_worked);
            let split = detect_monthly_overtime(cumulative_hours, hours_worked, monthly_hours);
            cumulative_hours = cumulative_hours.saturating_add(hours_worked);
            split.overtime_hours
        };

        let weekend_credit = match weekday {
            Weekday::Sun => rule.sunday,
            Weekday::Sat => rule.saturday,
            _ => Credit::None,
        };
        book(
            &mut result.sunday_work,
            weekend_credit,
            hours_worked,
            overtime_today,
            "sunday work",
            &mut notes,
        );

        let buckets = &rule.buckets;
        let bucket_targets = [
            (&mut result.first_shift, buckets.first_shift, "first shift"),
            (
                &mut result.second_third_shift,
                buckets.second_third_shift,
                "second+third shift",
            ),
            (&mut result.third_shift, buckets.third_shift, "third shift"),
            (&mut result.holidays, buckets.holidays, "holiday duty"),
            (&mut result.duty_hours, buckets.duty_hours, "duty"),
            (
                &mut result.hours_per_duty,
                buckets.hours_per_duty,
                "hours per duty",
            ),
        ];
        for (target, credit, label) in bucket_targets {
            book(target, credit, hours_worked, overtime_today, label, &mut notes);
        }

        if overtime_today > Decimal::ZERO {
            let overtime_credit = match weekday {
                Weekday::Sun => rule.overtime_sunday,
                Weekday::Sat => rule.overtime_saturday,
                _ => Credit::None,
            };
            book(
                &mut result.overtime_sunday_work,
                overtime_credit,
                hours_worked,
                overtime_today,
                "overtime sunday work",
                &mut notes,
            );
        }

        debug!(
            day,
            label = record.weekday_label.as_deref().unwrap_or(""),
            weekday = weekday_name(weekday),
            shift = record.shift_code.as_deref().unwrap_or(""),
            hours = %hours_worked,
            overtime_today = %overtime_today,
            credits = %notes.join(" | "),
            "Processed day"
        );

        days.push(DayAudit {
            day,
            weekday_label: record.weekday_label.clone(),
            weekday,
            shift_token: record.shift_code.clone(),
            shift_code,
            hours_worked,
            overtime_today,
            cumulative_hours,
            notes,
        });
    }

    result.overtime = result.total_hours.saturating_sub(monthly_hours);

    info!(
        code = %result.code,
        total_hours = %result.total_hours,
        overtime = %result.overtime,
        overtime_sunday_work = %result.overtime_sunday_work,
        "Employee aggregated"
    );

    EmployeeAggregation {
        result,
        anchor,
        days,
    }
}

/// Adds a credit to an accumulator and records a note for non-zero credits.
///
/// Accumulators saturate at the `Decimal` bounds.
fn book(
    target: &mut Decimal,
    credit: Credit,
    worked: Decimal,
    overtime_today: Decimal,
    label: &str,
    notes: &mut Vec<String>,
) {
    if credit.is_none() {
        return;
    }
    let hours = credit.hours(worked, overtime_today);
    *target = target.saturating_add(hours);
    if !hours.is_zero() {
        notes.push(format!("{} +{}", label, hours.normalize()));
    }
}
