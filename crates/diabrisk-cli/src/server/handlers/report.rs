//! Report handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use diabrisk::{PatientInput, Report};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body shared by the report endpoints.
#[derive(Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub name: String,
    pub input: PatientInput,
}

#[derive(Serialize)]
pub struct ReportResponse {
    #[serde(flatten)]
    pub report: Report,
    /// Suggested download name for the CSV export.
    pub filename: String,
}

/// POST /api/report
pub async fn build_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let Json(request) = payload?;
    let report = state.predictor.report(&request.input, request.name)?;
    let filename = report.filename();

    Ok(Json(ReportResponse { report, filename }))
}

/// POST /api/report/csv
pub async fn download_report_csv(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let report = state.predictor.report(&request.input, request.name)?;
    let csv = report.to_csv()?;
    let disposition = content_disposition(&report.filename())?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

/// Attachment header with an ASCII fallback and the exact UTF-8 name.
fn content_disposition(filename: &str) -> Result<HeaderValue, ApiError> {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .collect();
    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    );
    HeaderValue::from_str(&value)
        .map_err(|e| ApiError::Internal(format!("Invalid export filename: {}", e)))
}
