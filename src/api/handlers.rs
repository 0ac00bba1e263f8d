//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::calculation::parse_monthly_hours;
use crate::error::{EngineError, EngineResult};
use crate::models::Sheet;
use crate::pipeline::{ProcessOutcome, process_sheets, process_workbook};
use crate::report::write_xlsx;
use crate::workbook::CalamineWorkbook;

use super::request::{ProcessRequest, XlsxQuery};
use super::response::{ApiError, ApiErrorResponse, ProcessResponse};
use super::state::AppState;

/// Largest accepted request body.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Media type of the XLSX report.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const REPORT_DISPOSITION: &str = "attachment; filename=\"result.xlsx\"";

const CORRELATION_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_handler))
        .route("/process/xlsx", post(process_xlsx_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Handler for POST /process.
///
/// Accepts sheets as JSON grids and returns the report as JSON.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing JSON workbook");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(rejection);
            warn!(correlation_id = %correlation_id, error = %error.message, "Rejected request body");
            return with_correlation(
                correlation_id,
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, error),
            );
        }
    };

    let start_time = Instant::now();
    let span = info_span!("process", correlation_id = %correlation_id);
    let result = span.in_scope(|| -> EngineResult<ProcessOutcome> {
        let monthly_hours = request.monthly_hours.parse()?;
        let sheets: Vec<Sheet> = request.sheets.into_iter().map(Into::into).collect();
        process_sheets(&sheets, monthly_hours, state.config())
    });

    match result {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                employees = outcome.report.len(),
                excluded = outcome.report.excluded,
                duration_us = start_time.elapsed().as_micros(),
                "Processing completed successfully"
            );
            with_correlation(
                correlation_id,
                (StatusCode::OK, Json(ProcessResponse::new(correlation_id, outcome))),
            )
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for POST /process/xlsx.
///
/// Accepts a raw workbook upload and returns the report as an XLSX
/// attachment. Decoding and encoding run on the blocking pool.
async fn process_xlsx_handler(
    State(state): State<AppState>,
    Query(query): Query<XlsxQuery>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing uploaded workbook");

    let Some(raw_hours) = query.monthly_hours else {
        return with_correlation(
            correlation_id,
            ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::missing_field("monthly_hours")),
        );
    };
    let monthly_hours = match parse_monthly_hours(&raw_hours) {
        Ok(hours) => hours,
        Err(err) => return engine_failure(correlation_id, err),
    };

    let start_time = Instant::now();
    let config = state.config_handle();
    let span = info_span!("process_xlsx", correlation_id = %correlation_id);
    let joined = tokio::task::spawn_blocking(move || {
        span.in_scope(|| -> EngineResult<(ProcessOutcome, Vec<u8>)> {
            let mut workbook = CalamineWorkbook::from_bytes(body.to_vec())?;
            let outcome = process_workbook(&mut workbook, monthly_hours, &config)?;
            let bytes = write_xlsx(&outcome.report)?;
            Ok((outcome, bytes))
        })
    })
    .await;

    match joined {
        Ok(Ok((outcome, bytes))) => {
            info!(
                correlation_id = %correlation_id,
                employees = outcome.report.len(),
                excluded = outcome.report.excluded,
                report_bytes = bytes.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Processing completed successfully"
            );
            with_correlation(
                correlation_id,
                (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
                        (header::CONTENT_DISPOSITION, REPORT_DISPOSITION),
                    ],
                    bytes,
                ),
            )
        }
        Ok(Err(err)) => engine_failure(correlation_id, err),
        Err(join_error) => {
            error!(correlation_id = %correlation_id, error = %join_error, "Processing task failed");
            with_correlation(
                correlation_id,
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal("Processing task failed"),
                ),
            )
        }
    }
}

/// Maps a JSON body rejection to an error body.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn engine_failure(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Processing failed");
    let response: ApiErrorResponse = err.into();
    with_correlation(correlation_id, response)
}

fn with_correlation(correlation_id: Uuid, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Ok(value) = correlation_id.to_string().parse() {
        response.headers_mut().insert(CORRELATION_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn sample_request(monthly_hours: Value) -> Value {
        json!({
            "monthly_hours": monthly_hours,
            "sheets": [{
                "name": "Jan",
                "rows": [
                    [], [], [], [],
                    [null, null, null, "Н", "П"],
                    [null, null, null, 1, 2],
                    [12, "John", "смени", 1, 0.5],
                    [null, null, "р.час", 8, 12]
                ]
            }]
        })
    }

    async fn post_json(body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/process")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    // ==========================================================================
    // API-001: valid JSON workbook
    // ==========================================================================
    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let response = post_json(sample_request(json!(16)).to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-correlation-id"));
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: ProcessResponse = body_json(response).await;
        assert_eq!(result.columns.len(), 12);
        assert_eq!(result.blocks_found, 1);
        assert_eq!(result.records_extracted, 2);
        assert_eq!(result.employees.len(), 1);

        let employee = &result.employees[0];
        assert_eq!(employee.code, "12");
        assert_eq!(employee.total_hours, Decimal::from(20));
        assert_eq!(employee.overtime, Decimal::from(4));
        // Day 1 is Sunday: shift 1 earns 8 Sunday hours.
        assert_eq!(employee.sunday_work, Decimal::from(8));
        assert_eq!(employee.second_third_shift, Decimal::from(4));
    }

    // ==========================================================================
    // API-002: malformed JSON
    // ==========================================================================
    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let response = post_json("{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_002_missing_sheets_returns_400() {
        let response = post_json(json!({ "monthly_hours": 160 }).to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("sheets"));
    }

    // ==========================================================================
    // API-003: invalid monthly hours
    // ==========================================================================
    #[tokio::test]
    async fn test_api_003_non_numeric_monthly_hours_returns_400() {
        let response = post_json(sample_request(json!("lots")).to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_MONTHLY_HOURS");
    }

    // ==========================================================================
    // API-004: no employee data
    // ==========================================================================
    #[tokio::test]
    async fn test_api_004_no_blocks_returns_422() {
        let body = json!({
            "monthly_hours": "160",
            "sheets": [{ "name": "Notes", "rows": [["nothing here"]] }]
        });
        let response = post_json(body.to_string()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "NO_EMPLOYEE_DATA");
    }

    // ==========================================================================
    // API-005: XLSX upload errors
    // ==========================================================================
    #[tokio::test]
    async fn test_api_005_xlsx_without_threshold_returns_400() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/process/xlsx")
                    .body(Body::from(vec![1u8, 2, 3]))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MISSING_FIELD");
    }

    #[tokio::test]
    async fn test_api_005_xlsx_garbage_returns_422() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/process/xlsx?monthly_hours=160")
                    .body(Body::from("definitely not a workbook"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "WORKBOOK_READ_ERROR");
    }
}
