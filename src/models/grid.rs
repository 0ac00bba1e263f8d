//! Grid model for sheet contents.
//!
//! A grid is the untyped, text-only view of one sheet: rows of nullable
//! cells, indexed from zero. Rows may be ragged; a column past the end of a
//! row is "missing", which is distinct from a present-but-empty cell.

use serde::{Deserialize, Serialize};

/// A single cell: absent, or its text verbatim.
pub type Cell = Option<String>;

/// One row of cells.
pub type CellRow = Vec<Cell>;

/// A per-sheet table of nullable text cells.
///
/// # Example
///
/// ```
/// use timesheet_payroll::models::Grid;
///
/// let grid = Grid::new(vec![
///     vec![Some("12".to_string()), None],
///     vec![Some("8".to_string())],
/// ]);
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid.text(0, 0), Some("12"));
/// assert_eq!(grid.text(0, 1), None);
/// assert_eq!(grid.text(1, 5), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<CellRow>,
}

impl Grid {
    /// Creates a grid from its rows.
    pub fn new(rows: Vec<CellRow>) -> Self {
        Self { rows }
    }

    /// Builds a grid from string literals, treating `""` as an absent cell.
    ///
    /// Mostly useful for tests and fixtures.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                        .collect()
                })
                .collect(),
        )
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[CellRow] {
        &self.rows
    }

    /// Returns a row by index.
    pub fn row(&self, index: usize) -> Option<&CellRow> {
        self.rows.get(index)
    }

    /// Returns the text of a cell, or `None` if the cell is absent or missing.
    pub fn text(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|cell| cell.as_deref())
    }
}

/// A named sheet of a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// The sheet (tab) name.
    pub name: String,
    /// The sheet contents.
    pub grid: Grid,
}

impl Sheet {
    /// Creates a new sheet.
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_strs_maps_blank_to_absent() {
        let grid = Grid::from_strs(&[&["a", "", "c"]]);
        assert_eq!(grid.row(0).unwrap(), &vec![Some("a".to_string()), None, Some("c".to_string())]);
    }

    #[test]
    fn test_text_out_of_range_is_none() {
        let grid = Grid::from_strs(&[&["a"]]);
        assert_eq!(grid.text(0, 0), Some("a"));
        assert_eq!(grid.text(0, 1), None);
        assert_eq!(grid.text(3, 0), None);
        assert!(grid.row(1).is_none());
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);
    }

    #[test]
    fn test_grid_serializes_as_nested_arrays() {
        let grid = Grid::from_strs(&[&["1", ""]]);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["1",null]]"#);

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
