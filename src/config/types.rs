//! Configuration types for timesheet extraction.
//!
//! This module contains the strongly-typed layout descriptor that is
//! deserialized from `layout.yaml`. Every field defaults to the fixed
//! convention used by the monthly timesheet workbooks, so a partial file only
//! needs to name what differs.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A weekday-row letter that identifies its day unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorLetter {
    /// The label as it appears in the weekday row (compared after trimming).
    pub letter: String,
    /// The weekday the label stands for.
    pub weekday: Weekday,
}

impl AnchorLetter {
    /// Creates a new anchor letter.
    pub fn new(letter: impl Into<String>, weekday: Weekday) -> Self {
        Self {
            letter: letter.into(),
            weekday,
        }
    }
}

/// How synthetic codes for employees without a numeric code are scoped.
///
/// The counter behind `unknown_<n>` restarts on every sheet, so two sheets
/// can each produce `unknown_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCodePolicy {
    /// `unknown_<n>`; equal synthetic codes on different sheets merge into
    /// one employee when their names also match.
    #[default]
    Shared,
    /// `<sheet name>:unknown_<n>`; synthetic codes never merge across sheets.
    PerSheet,
}

/// Positional schema of a monthly timesheet sheet.
///
/// # Example
///
/// ```
/// use timesheet_payroll::config::SheetLayout;
///
/// let layout = SheetLayout::default();
/// assert_eq!(layout.weekday_row, 4);
/// assert_eq!(layout.day_number_row, 5);
/// assert_eq!(layout.day_column(0), 3);
/// assert_eq!(layout.day_column(30), 33);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Column holding the employee code on the marker row.
    pub code_column: usize,
    /// Column holding the employee name on the marker row.
    pub name_column: usize,
    /// Column holding the shift-section keyword on the marker row.
    pub marker_column: usize,
    /// Row holding the weekday letters.
    pub weekday_row: usize,
    /// Row holding the day-of-month numbers.
    pub day_number_row: usize,
    /// Grid column of day slot 0 (day 1 of the month).
    pub first_day_column: usize,
    /// Number of day slots read per block.
    pub day_slots: usize,
    /// Marker cell value identifying a shift-code row (trimmed, case-folded).
    pub shift_keyword: String,
    /// Substring identifying an hours row (case-folded).
    pub hours_keyword: String,
    /// Letters that pin a weekday unambiguously.
    pub anchor_letters: Vec<AnchorLetter>,
    /// Scoping of synthetic employee codes.
    pub unknown_code_policy: UnknownCodePolicy,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            code_column: 0,
            name_column: 1,
            marker_column: 2,
            weekday_row: 4,
            day_number_row: 5,
            first_day_column: 3,
            day_slots: 31,
            shift_keyword: "смени".to_string(),
            hours_keyword: "р.час".to_string(),
            anchor_letters: default_anchor_letters(),
            unknown_code_policy: UnknownCodePolicy::Shared,
        }
    }
}

/// The weekday initials that occur only once in a week (вторник, четврток,
/// недела). The other initials are shared by two days and cannot anchor.
pub fn default_anchor_letters() -> Vec<AnchorLetter> {
    vec![
        AnchorLetter::new("В", Weekday::Tue),
        AnchorLetter::new("Ч", Weekday::Thu),
        AnchorLetter::new("Н", Weekday::Sun),
    ]
}

/// Finds the anchor letter matching a weekday-row label. Both sides are
/// compared trimmed.
pub fn find_anchor<'a>(anchors: &'a [AnchorLetter], label: &str) -> Option<&'a AnchorLetter> {
    let label = label.trim();
    anchors.iter().find(|anchor| anchor.letter.trim() == label)
}

impl SheetLayout {
    /// Returns the grid column for a zero-based day slot.
    pub fn day_column(&self, slot: usize) -> usize {
        self.first_day_column + slot
    }

    /// Minimum number of rows a sheet needs before daily records can be built.
    pub fn min_rows(&self) -> usize {
        self.weekday_row.max(self.day_number_row) + 1
    }

    /// Looks up the weekday pinned by a weekday-row label.
    pub fn anchor_weekday(&self, label: &str) -> Option<Weekday> {
        find_anchor(&self.anchor_letters, label).map(|anchor| anchor.weekday)
    }

    /// Checks the layout for contradictions.
    pub fn validate(&self) -> EngineResult<()> {
        if self.day_slots == 0 {
            return Err(invalid("day_slots must be at least 1"));
        }
        if self.weekday_row == self.day_number_row {
            return Err(invalid("weekday_row and day_number_row must differ"));
        }
        if self.shift_keyword.trim().is_empty() {
            return Err(invalid("shift_keyword must not be empty"));
        }
        if self.hours_keyword.trim().is_empty() {
            return Err(invalid("hours_keyword must not be empty"));
        }
        if self.anchor_letters.iter().any(|a| a.letter.trim().is_empty()) {
            return Err(invalid("anchor letters must not be empty"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidLayout {
        message: message.to_string(),
    }
}
