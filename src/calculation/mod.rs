//! Calculation logic for the payroll aggregator.
//!
//! This module contains the numeric side of the pipeline: parsing hour
//! values, inferring weekdays from the sheet's weekday letters, splitting
//! hours around the monthly overtime threshold, and aggregating one
//! employee's daily records into an [`AggregatedResult`](crate::models::AggregatedResult).

mod aggregator;
mod hours;
mod overtime;
mod weekday_inference;

pub use aggregator::{
    EmployeeAggregation, EmployeeRecords, aggregate, aggregate_employee, group_by_employee,
};
pub use hours::{parse_hours, parse_monthly_hours};
pub use overtime::{MonthlyOvertimeSplit, detect_monthly_overtime};
pub use weekday_inference::{WeekdayAnchor, resolve_anchor, weekday_name};
