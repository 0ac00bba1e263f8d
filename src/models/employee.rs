//! Employee block and identity models.

use serde::{Deserialize, Serialize};

use super::CellRow;

/// The aggregation key: daily records sharing a code and name belong to one
/// employee, across every sheet of a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeKey {
    /// The employee code (numeric, or synthetic `unknown_<n>`).
    pub code: String,
    /// The employee name as written on the sheet.
    pub name: String,
}

impl EmployeeKey {
    /// Creates a new key.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// An employee attendance block found in a grid.
///
/// The shift row is the marker row itself; the hours row is the row directly
/// below it when that row carries the hours keyword. A block without an
/// hours row is kept but yields no daily records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeBlock {
    /// The employee code.
    pub code: String,
    /// The employee name (empty when the name cell is absent).
    pub name: String,
    /// Grid row index of the marker row.
    pub row_index: usize,
    /// The shift-code row.
    pub shift_row: CellRow,
    /// The paired hours row, if any.
    pub hours_row: Option<CellRow>,
}

impl EmployeeBlock {
    /// Returns the aggregation key of this block.
    pub fn key(&self) -> EmployeeKey {
        EmployeeKey::new(self.code.clone(), self.name.clone())
    }

    /// Returns true if the block has a paired hours row.
    pub fn has_hours(&self) -> bool {
        self.hours_row.is_some()
    }
}
