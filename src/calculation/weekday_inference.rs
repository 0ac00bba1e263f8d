//! Weekday inference for day-of-month columns.
//!
//! Timesheets label each day column with a single Cyrillic initial, and most
//! initials are shared by two weekdays (`П` is both понеделник and петок).
//! Only a few letters pin their weekday. The first such letter in an
//! employee's month becomes the anchor, and every other day's weekday follows
//! by counting from it.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AnchorLetter, find_anchor};
use crate::models::DailyRecord;

/// Weekdays indexed from Monday = 0.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A day of month with a known weekday.
///
/// # Example
///
/// ```
/// use timesheet_payroll::calculation::WeekdayAnchor;
/// use chrono::Weekday;
///
/// let anchor = WeekdayAnchor { day: 10, weekday: Weekday::Sun, from_label: true };
/// assert_eq!(anchor.weekday_of(17), Weekday::Sun);
/// assert_eq!(anchor.weekday_of(11), Weekday::Mon);
/// assert_eq!(anchor.weekday_of(9), Weekday::Sat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayAnchor {
    /// The anchored day of month.
    pub day: i64,
    /// The weekday of that day.
    pub weekday: Weekday,
    /// False when no anchor letter was found and Monday was assumed.
    pub from_label: bool,
}

impl WeekdayAnchor {
    /// Returns the weekday of any day of the same month.
    pub fn weekday_of(&self, day: i64) -> Weekday {
        let anchor_index = i64::from(self.weekday.num_days_from_monday());
        let offset = day.rem_euclid(7) - self.day.rem_euclid(7);
        let index = (anchor_index + offset).rem_euclid(7);
        WEEKDAYS[index as usize]
    }
}

/// Resolves the weekday anchor for one employee's records.
///
/// `records` must already be in ascending day order. The first record whose
/// weekday label is an anchor letter wins; its day falls back to 1 if the
/// day number does not parse. Without any anchor letter, the first record's
/// day (or 1) is assumed to be a Monday.
pub fn resolve_anchor<'a, I>(records: I, anchors: &[AnchorLetter]) -> WeekdayAnchor
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    let mut first_day = None;

    for (position, record) in records.into_iter().enumerate() {
        if position == 0 {
            first_day = Some(record.parsed_day().unwrap_or(1));
        }

        let Some(label) = record.weekday_label.as_deref().map(str::trim) else {
            continue;
        };
        let Some(anchor) = find_anchor(anchors, label) else {
            continue;
        };

        let day = record.parsed_day().unwrap_or(1);
        debug!(day, letter = label, weekday = %anchor.weekday, "Resolved weekday anchor");
        return WeekdayAnchor {
            day,
            weekday: anchor.weekday,
            from_label: true,
        };
    }

    let day = first_day.unwrap_or(1);
    debug!(day, "No anchor letter found, assuming Monday");
    WeekdayAnchor {
        day,
        weekday: Weekday::Mon,
        from_label: false,
    }
}

/// Returns the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
