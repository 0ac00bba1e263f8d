//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/process`
//! endpoint and the query string of `/process/xlsx`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_monthly_hours;
use crate::error::EngineResult;
use crate::models::{Cell, Grid, Sheet};
use crate::workbook::render_float;

/// Request body for the `/process` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The monthly hours threshold.
    pub monthly_hours: MonthlyHoursInput,
    /// The workbook's sheets, in order.
    pub sheets: Vec<SheetInput>,
}

/// The monthly hours threshold, as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthlyHoursInput {
    /// A JSON number, e.g. `160`.
    Number(serde_json::Number),
    /// A string, e.g. `"167.5"`.
    Text(String),
}

impl MonthlyHoursInput {
    /// Validates and converts the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonthlyHours`](crate::error::EngineError::InvalidMonthlyHours)
    /// if the value is not a number.
    pub fn parse(&self) -> EngineResult<Decimal> {
        match self {
            MonthlyHoursInput::Number(number) => parse_monthly_hours(&number.to_string()),
            MonthlyHoursInput::Text(text) => parse_monthly_hours(text),
        }
    }
}

/// One sheet of a JSON upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetInput {
    /// The sheet name.
    pub name: String,
    /// Rows of cells; `null` is an absent cell.
    #[serde(default)]
    pub rows: Vec<Vec<Option<CellInput>>>,
}

/// A non-null cell of a JSON upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellInput {
    /// Text, kept verbatim.
    Text(String),
    /// A number, rendered like a spreadsheet number cell.
    Number(serde_json::Number),
    /// A boolean, rendered as `True` or `False`.
    Bool(bool),
}

impl CellInput {
    /// Renders the cell as grid text.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_payroll::api::CellInput;
    ///
    /// let cell: CellInput = serde_json::from_str("8.0").unwrap();
    /// assert_eq!(cell.render(), "8");
    /// let cell: CellInput = serde_json::from_str("0.5").unwrap();
    /// assert_eq!(cell.render(), "0.5");
    /// ```
    pub fn render(&self) -> String {
        match self {
            CellInput::Text(text) => text.clone(),
            CellInput::Number(number) => match number.as_i64() {
                Some(integer) => integer.to_string(),
                None => number
                    .as_f64()
                    .map(render_float)
                    .unwrap_or_else(|| number.to_string()),
            },
            CellInput::Bool(true) => "True".to_string(),
            CellInput::Bool(false) => "False".to_string(),
        }
    }
}

impl From<SheetInput> for Sheet {
    fn from(input: SheetInput) -> Self {
        let rows = input
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| -> Cell { cell.map(|c| c.render()) })
                    .collect()
            })
            .collect();
        Sheet::new(input.name, Grid::new(rows))
    }
}

/// Query string of the `/process/xlsx` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XlsxQuery {
    /// The monthly hours threshold, unparsed.
    pub monthly_hours: Option<String>,
}
