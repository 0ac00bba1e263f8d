//! Employee block detection.
//!
//! An employee block starts at a row whose marker column holds the shift
//! keyword. That row carries the employee code, the name, and one shift token
//! per day slot. When the row directly below contains the hours keyword in
//! any cell, it is paired as the block's hours row and skipped by the scan.

use tracing::debug;

use crate::config::{SheetLayout, UnknownCodePolicy};
use crate::models::{CellRow, EmployeeBlock, Grid};

/// Returns true if the row is an hours row (any cell contains the hours
/// keyword, ignoring case).
pub fn is_hours_row(row: &CellRow, layout: &SheetLayout) -> bool {
    let keyword = layout.hours_keyword.to_lowercase();
    row.iter()
        .flatten()
        .any(|cell| cell.to_lowercase().contains(&keyword))
}

/// Returns true if the row is a block marker row.
pub fn is_marker_row(row: &CellRow, layout: &SheetLayout) -> bool {
    row.get(layout.marker_column)
        .and_then(|cell| cell.as_deref())
        .is_some_and(|cell| cell.trim().to_lowercase() == layout.shift_keyword.to_lowercase())
}

/// Derives the numeric employee code from a code cell.
///
/// A trailing `.0` left by float rendering is stripped; the rest must be
/// all ASCII digits.
///
/// # Example
///
/// ```
/// use timesheet_payroll::extraction::numeric_code;
///
/// assert_eq!(numeric_code(Some("105.0")).as_deref(), Some("105"));
/// assert_eq!(numeric_code(Some("105")).as_deref(), Some("105"));
/// assert_eq!(numeric_code(Some("A-7")), None);
/// assert_eq!(numeric_code(None), None);
/// ```
pub fn numeric_code(cell: Option<&str>) -> Option<String> {
    let raw = cell.unwrap_or("");
    let code = raw.strip_suffix(".0").unwrap_or(raw);
    (!code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())).then(|| code.to_string())
}

/// Scans a grid top to bottom and returns its employee blocks in row order.
///
/// Non-numeric codes get a synthetic `unknown_<n>` code, with `n` counting
/// from 1 within this grid; `sheet_name` scopes it when the layout asks for
/// per-sheet synthetic codes.
///
/// # Example
///
/// ```
/// use timesheet_payroll::config::SheetLayout;
/// use timesheet_payroll::extraction::extract_blocks;
/// use timesheet_payroll::models::Grid;
///
/// let grid = Grid::from_strs(&[
///     &["105.0", "Ana", "смени", "1"],
///     &["", "", "р.час", "8"],
/// ]);
/// let blocks = extract_blocks(&grid, "Jan", &SheetLayout::default());
///
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].code, "105");
/// assert!(blocks[0].hours_row.is_some());
/// ```
pub fn extract_blocks(grid: &Grid, sheet_name: &str, layout: &SheetLayout) -> Vec<EmployeeBlock> {
    let rows = grid.rows();
    let mut blocks = Vec::new();
    let mut unknown_counter = 1usize;
    let mut i = 0;

    while i < rows.len() {
        let row = &rows[i];
        if !is_marker_row(row, layout) {
            i += 1;
            continue;
        }

        let code_cell = row.get(layout.code_column).and_then(|c| c.as_deref());
        let code = match numeric_code(code_cell) {
            Some(code) => code,
            None => {
                let synthetic = match layout.unknown_code_policy {
                    UnknownCodePolicy::Shared => format!("unknown_{}", unknown_counter),
                    UnknownCodePolicy::PerSheet => {
                        format!("{}:unknown_{}", sheet_name, unknown_counter)
                    }
                };
                unknown_counter += 1;
                synthetic
            }
        };

        let name = row
            .get(layout.name_column)
            .and_then(|c| c.clone())
            .unwrap_or_default();

        let hours_row = rows
            .get(i + 1)
            .filter(|next| is_hours_row(next, layout))
            .cloned();

        debug!(
            sheet = sheet_name,
            row = i,
            code = %code,
            name = %name,
            paired = hours_row.is_some(),
            "Found employee block"
        );

        let step = if hours_row.is_some() { 2 } else { 1 };
        blocks.push(EmployeeBlock {
            code,
            name,
            row_index: i,
            shift_row: row.clone(),
            hours_row,
        });
        i += step;
    }

    blocks
}
