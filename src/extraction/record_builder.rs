//! Daily record expansion.
//!
//! Each paired block is expanded into one record per day slot, reading the
//! weekday letters and day numbers from the two fixed header rows of the
//! sheet.

use tracing::debug;

use crate::config::SheetLayout;
use crate::models::{DailyRecord, EmployeeBlock, Grid};

use super::normalize_shift_value;

/// Builds the daily records of every paired block in a grid.
///
/// Returns nothing if the grid is too short to hold both header rows. Slots
/// past the end of either the shift row or the hours row are skipped;
/// present-but-empty cells yield records with absent values.
///
/// # Example
///
/// ```
/// use timesheet_payroll::config::SheetLayout;
/// use timesheet_payroll::extraction::{build_records, extract_blocks};
/// use timesheet_payroll::models::Grid;
///
/// let grid = Grid::from_strs(&[
///     &[], &[], &[], &[],
///     &["", "", "", "Н", "П"],
///     &["", "", "", "1", "2"],
///     &["12", "John", "смени", "1", "0.5"],
///     &["", "", "р.час", "8", "12"],
/// ]);
/// let layout = SheetLayout::default();
/// let blocks = extract_blocks(&grid, "Jan", &layout);
/// let records = build_records(&grid, &blocks, &layout);
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].shift_code.as_deref(), Some("1/2"));
/// assert_eq!(records[1].day_of_month.as_deref(), Some("2"));
/// ```
pub fn build_records(grid: &Grid, blocks: &[EmployeeBlock], layout: &SheetLayout) -> Vec<DailyRecord> {
    if grid.len() < layout.min_rows() {
        return Vec::new();
    }

    let header = |row: usize| -> Vec<Option<String>> {
        (0..layout.day_slots)
            .map(|slot| grid.text(row, layout.day_column(slot)).map(str::to_string))
            .collect()
    };
    let weekday_labels = header(layout.weekday_row);
    let day_numbers = header(layout.day_number_row);

    let mut records = Vec::new();
    for block in blocks {
        let Some(hours_row) = &block.hours_row else {
            debug!(
                row = block.row_index,
                code = %block.code,
                "Block has no hours row, no daily records"
            );
            continue;
        };

        let before = records.len();
        for slot in 0..layout.day_slots {
            let column = layout.day_column(slot);
            let (Some(shift_cell), Some(hours_cell)) =
                (block.shift_row.get(column), hours_row.get(column))
            else {
                continue;
            };

            records.push(DailyRecord {
                code: block.code.clone(),
                name: block.name.clone(),
                day_of_month: day_numbers[slot].clone(),
                shift_code: normalize_shift_value(shift_cell.as_deref()),
                hours_worked: hours_cell.clone(),
                weekday_label: weekday_labels[slot].clone(),
            });
        }
        debug!(
            row = block.row_index,
            code = %block.code,
            records = records.len() - before,
            "Expanded block"
        );
    }

    records
}
