//! Workbook sources.
//!
//! A [`GridSource`] turns an uploaded workbook into named [`Sheet`]s of text
//! cells. Extraction only ever sees grids, so the decoding library stays
//! behind this seam.

mod calamine_source;
mod memory;

pub use calamine_source::{CalamineWorkbook, render_cell};
pub(crate) use calamine_source::render_float;
pub use memory::InMemoryWorkbook;

use crate::error::EngineResult;
use crate::models::Sheet;

/// Anything that can produce the sheets of a workbook, in workbook order.
pub trait GridSource {
    /// Reads every sheet as a grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::WorkbookRead`](crate::error::EngineError::WorkbookRead)
    /// if the underlying workbook cannot be decoded.
    fn sheets(&mut self) -> EngineResult<Vec<Sheet>>;
}
