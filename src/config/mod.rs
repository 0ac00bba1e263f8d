//! Configuration loading and management for the timesheet payroll engine.
//!
//! The only configuration is the positional layout of a timesheet sheet:
//! which rows carry the weekday letters and day numbers, which columns hold
//! the day slots, and which keywords mark employee blocks.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Day slots: {}", config.layout().day_slots);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, LAYOUT_FILE_NAME};
pub use types::{AnchorLetter, SheetLayout, UnknownCodePolicy, default_anchor_letters, find_anchor};
