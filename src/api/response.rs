//! Response types for the payroll API.
//!
//! This module defines the success body of `/process`, the error response
//! structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AggregatedResult;
use crate::pipeline::ProcessOutcome;

/// Response body of the `/process` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Identifier of this request in the service logs.
    pub correlation_id: Uuid,
    /// The report header.
    pub columns: Vec<String>,
    /// Retained employees in report order.
    pub employees: Vec<AggregatedResult>,
    /// Employees left out for negative overtime.
    pub excluded: usize,
    /// Employee blocks found across all sheets.
    pub blocks_found: usize,
    /// Daily records extracted across all sheets.
    pub records_extracted: usize,
}

impl ProcessResponse {
    /// Builds the response body from a pipeline outcome.
    pub fn new(correlation_id: Uuid, outcome: ProcessOutcome) -> Self {
        Self {
            correlation_id,
            columns: outcome.report.columns.iter().map(|c| c.to_string()).collect(),
            employees: outcome.report.employees,
            excluded: outcome.report.excluded,
            blocks_found: outcome.blocks_found,
            records_extracted: outcome.records_extracted,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("missing field: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }

    /// Creates an internal error response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidLayout { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidMonthlyHours { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_MONTHLY_HOURS",
                    message,
                    "Monthly hours must be a decimal number such as 160 or 167.5",
                ),
            ),
            EngineError::NoEmployeeData => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "NO_EMPLOYEE_DATA",
                    message,
                    "No sheet has a row with the shift keyword in the marker column",
                ),
            ),
            EngineError::WorkbookRead { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "WORKBOOK_READ_ERROR",
                    "The uploaded file could not be read as a workbook",
                    message,
                ),
            ),
            EngineError::ReportWrite { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("REPORT_WRITE_ERROR", "Report generation failed", message),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_monthly_hours_is_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidMonthlyHours {
            input: "abc".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_MONTHLY_HOURS");
        assert!(response.error.message.contains("abc"));
    }

    #[test]
    fn test_no_employee_data_is_unprocessable() {
        let response: ApiErrorResponse = EngineError::NoEmployeeData.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "NO_EMPLOYEE_DATA");
    }

    #[test]
    fn test_workbook_read_is_unprocessable() {
        let response: ApiErrorResponse = EngineError::WorkbookRead {
            message: "bad zip".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.details.as_deref(), Some("Failed to read workbook: bad zip"));
    }

    #[test]
    fn test_config_errors_are_internal() {
        for error in [
            EngineError::ConfigNotFound { path: "x".to_string() },
            EngineError::InvalidLayout { message: "y".to_string() },
        ] {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.error.code, "CONFIG_ERROR");
        }
    }
}
