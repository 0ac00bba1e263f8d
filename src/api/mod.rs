//! HTTP API module for the timesheet payroll service.
//!
//! `POST /process` accepts sheets as JSON grids and answers with the report
//! as JSON; `POST /process/xlsx` accepts a raw workbook upload and answers
//! with the report as an XLSX attachment.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_UPLOAD_BYTES, XLSX_CONTENT_TYPE, create_router};
pub use request::{CellInput, MonthlyHoursInput, ProcessRequest, SheetInput, XlsxQuery};
pub use response::{ApiError, ApiErrorResponse, ProcessResponse};
pub use state::AppState;
