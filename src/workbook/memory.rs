//! In-memory workbook source.

use crate::error::EngineResult;
use crate::models::Sheet;

use super::GridSource;

/// A workbook whose sheets are already grids.
///
/// # Example
///
/// ```
/// use timesheet_payroll::models::{Grid, Sheet};
/// use timesheet_payroll::workbook::{GridSource, InMemoryWorkbook};
///
/// let mut workbook = InMemoryWorkbook::new(vec![Sheet::new("Jan", Grid::default())]);
/// let sheets = workbook.sheets().unwrap();
/// assert_eq!(sheets[0].name, "Jan");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryWorkbook {
    sheets: Vec<Sheet>,
}

impl InMemoryWorkbook {
    /// Creates a workbook from its sheets.
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Appends a sheet.
    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }
}

impl GridSource for InMemoryWorkbook {
    fn sheets(&mut self) -> EngineResult<Vec<Sheet>> {
        Ok(self.sheets.clone())
    }
}

impl From<Vec<Sheet>> for InMemoryWorkbook {
    fn from(sheets: Vec<Sheet>) -> Self {
        Self::new(sheets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grid;

    #[test]
    fn test_sheets_are_returned_in_order() {
        let mut workbook = InMemoryWorkbook::default();
        workbook.push(Sheet::new("A", Grid::from_strs(&[&["1"]])));
        workbook.push(Sheet::new("B", Grid::default()));

        let sheets = workbook.sheets().unwrap();
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(sheets[0].grid.text(0, 0), Some("1"));
    }

    #[test]
    fn test_reading_twice_gives_the_same_sheets() {
        let mut workbook = InMemoryWorkbook::from(vec![Sheet::new("A", Grid::default())]);
        assert_eq!(workbook.sheets().unwrap(), workbook.sheets().unwrap());
    }
}
