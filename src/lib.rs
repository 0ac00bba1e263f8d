//! Timesheet payroll aggregation.
//!
//! This crate reads monthly timesheet workbooks (one block of rows per
//! employee, one column per day), extracts a daily attendance record for
//! every employee and day, and aggregates those records into per-employee
//! payroll totals: worked hours, overtime against a monthly threshold,
//! per-shift hours, duty hours and weekend credits.
//!
//! The stages are exposed separately ([`extraction`], [`calculation`],
//! [`report`]) and end to end through [`pipeline`] and the [`api`] router.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod workbook;
