//! Record extraction from timesheet grids.
//!
//! This module turns an untyped sheet grid into daily attendance records:
//! shift value repair, employee block detection, and per-day expansion using
//! the fixed header rows.

mod block_extractor;
mod normalizer;
mod record_builder;

pub use block_extractor::{extract_blocks, is_hours_row, is_marker_row, numeric_code};
pub use normalizer::normalize_shift_value;
pub use record_builder::build_records;
