//! Spreadsheet decoding with calamine.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CellRow, Grid, Sheet};

use super::GridSource;

/// A workbook decoded by calamine (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`).
///
/// Every cell is rendered to text with [`render_cell`], and each sheet's
/// used range is re-anchored at `A1` so that row and column indices match the
/// positions a user sees in the spreadsheet.
pub struct CalamineWorkbook<RS: Read + Seek> {
    sheets: Sheets<RS>,
}

impl CalamineWorkbook<Cursor<Vec<u8>>> {
    /// Decodes a workbook held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::WorkbookRead`] if the bytes are not a workbook
    /// in any supported format.
    pub fn from_bytes(bytes: Vec<u8>) -> EngineResult<Self> {
        let sheets = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        Ok(Self { sheets })
    }
}

impl CalamineWorkbook<BufReader<File>> {
    /// Opens a workbook file, choosing the format from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let sheets = open_workbook_auto(path).map_err(|e| EngineError::WorkbookRead {
            message: format!("{}: {}", path.display(), e),
        })?;
        Ok(Self { sheets })
    }
}

impl<RS: Read + Seek> GridSource for CalamineWorkbook<RS> {
    fn sheets(&mut self) -> EngineResult<Vec<Sheet>> {
        let names = self.sheets.sheet_names();
        let mut sheets = Vec::with_capacity(names.len());

        for name in names {
            let range = self.sheets.worksheet_range(&name)?;
            let grid = range_to_grid(&range);
            debug!(sheet = %name, rows = grid.len(), "Decoded sheet");
            sheets.push(Sheet::new(name, grid));
        }

        Ok(sheets)
    }
}

/// Converts a used range into a grid anchored at `A1`.
fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((first_row, first_column)) = range.start() else {
        return Grid::default();
    };

    let mut rows: Vec<CellRow> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells: CellRow = vec![None; first_column as usize];
        cells.extend(row.iter().map(render_cell));
        rows.push(cells);
    }

    Grid::new(rows)
}

/// Renders one decoded cell as text, the way a text-typed sheet read does.
///
/// Empty and error cells are absent. Integral floats lose their `.0`, so a
/// day number typed as `5` reads back as `"5"`.
///
/// # Example
///
/// ```
/// use calamine::Data;
/// use timesheet_payroll::workbook::render_cell;
///
/// assert_eq!(render_cell(&Data::Float(8.0)), Some("8".to_string()));
/// assert_eq!(render_cell(&Data::Float(0.5)), Some("0.5".to_string()));
/// assert_eq!(render_cell(&Data::String("1/2".to_string())), Some("1/2".to_string()));
/// assert_eq!(render_cell(&Data::Empty), None);
/// ```
pub fn render_cell(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(text.clone()),
        Data::Float(value) => Some(render_float(*value)),
        Data::Int(value) => Some(value.to_string()),
        Data::Bool(true) => Some("True".to_string()),
        Data::Bool(false) => Some("False".to_string()),
        Data::DateTime(value) => Some(match value.as_datetime() {
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => render_float(value.as_f64()),
        }),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Some(text.clone()),
    }
}

/// Renders a float as the shortest decimal that reads back to it.
pub(crate) fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers() {
        assert_eq!(render_cell(&Data::Float(24.0)), Some("24".to_string()));
        assert_eq!(render_cell(&Data::Float(-3.0)), Some("-3".to_string()));
        assert_eq!(render_cell(&Data::Float(7.25)), Some("7.25".to_string()));
        assert_eq!(render_cell(&Data::Int(31)), Some("31".to_string()));
    }

    #[test]
    fn test_render_text_verbatim() {
        assert_eq!(
            render_cell(&Data::String(" смени ".to_string())),
            Some(" смени ".to_string())
        );
        assert_eq!(
            render_cell(&Data::DateTimeIso("2024-02-03".to_string())),
            Some("2024-02-03".to_string())
        );
    }

    #[test]
    fn test_render_bool_and_missing() {
        assert_eq!(render_cell(&Data::Bool(true)), Some("True".to_string()));
        assert_eq!(render_cell(&Data::Bool(false)), Some("False".to_string()));
        assert_eq!(render_cell(&Data::Empty), None);
        assert_eq!(
            render_cell(&Data::Error(calamine::CellErrorType::Div0)),
            None
        );
    }

    #[test]
    fn test_render_float_large_values() {
        assert_eq!(render_float(1e20), "100000000000000000000");
        assert_eq!(render_float(f64::NAN), "NaN");
    }

    #[test]
    fn test_range_is_reanchored_at_a1() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("12".to_string()));
        range.set_value((3, 2), Data::Float(8.0));

        let grid = range_to_grid(&range);
        assert_eq!(grid.len(), 4);
        assert!(grid.row(0).unwrap().is_empty());
        assert_eq!(grid.text(2, 0), None);
        assert_eq!(grid.text(2, 1), Some("12"));
        assert_eq!(grid.text(3, 2), Some("8"));
    }

    #[test]
    fn test_empty_range_is_empty_grid() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_grid(&range).is_empty());
    }

    #[test]
    fn test_garbage_bytes_are_a_read_error() {
        let result = CalamineWorkbook::from_bytes(b"not a workbook".to_vec());
        assert!(matches!(result, Err(EngineError::WorkbookRead { .. })));
    }
}
