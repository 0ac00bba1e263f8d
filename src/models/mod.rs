//! Core data models for the timesheet payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aggregated_result;
mod daily_record;
mod employee;
mod grid;
mod shift_code;

pub use aggregated_result::{AggregatedResult, DayAudit};
pub use daily_record::DailyRecord;
pub use employee::{EmployeeBlock, EmployeeKey};
pub use grid::{Cell, CellRow, Grid, Sheet};
pub use shift_code::{BucketCredits, Credit, ShiftCode, ShiftRule};
