use std::str::FromStr;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use cysafe_common::error::CysafeError;
use cysafe_db::reports::models::{HowReceived, NewScamReport, ScamType};
use cysafe_db::reports::repositories::ReportRepository;

use crate::error::ApiError;
use crate::reports::formatters;
use crate::reports::requests::SubmitReportRequest;
use crate::reports::responses::{ListReportsResponse, ReportResponse};
use crate::AppState;

fn validate_email(email: &str) -> Result<(), CysafeError> {
    if !email.contains('@') || !email.contains('.') {
        return Err(CysafeError::Validation(format!(
            "invalid email format: {email}"
        )));
    }
    Ok(())
}

/// Treat absent and blank optional fields the same way the original form
/// did: both mean "not provided".
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub async fn submit_report(
    State(state): State<AppState>,
    Json(body): Json<SubmitReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.scam_url.trim().is_empty() {
        return Err(ApiError(CysafeError::Validation(
            "scam_url must not be empty".to_string(),
        )));
    }
    if body.details.trim().is_empty() {
        return Err(ApiError(CysafeError::Validation(
            "details must not be empty".to_string(),
        )));
    }

    let scam_type =
        ScamType::from_str(body.scam_type.trim()).map_err(CysafeError::Validation)?;

    let how_received = non_empty(body.how_received)
        .map(|v| HowReceived::from_str(&v).map_err(CysafeError::Validation))
        .transpose()?;

    let contact_email = non_empty(body.contact_email);
    if let Some(ref email) = contact_email {
        validate_email(email)?;
    }

    let report = state
        .report_repo
        .append(NewScamReport {
            scam_url: body.scam_url.trim().to_string(),
            scam_type,
            how_received,
            details: body.details.trim().to_string(),
            contact_email,
        })
        .await?;

    tracing::info!(id = report.id, scam_type = scam_type.as_str(), "report submitted");
    Ok((StatusCode::CREATED, Json(ReportResponse::from(report))))
}

pub async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<ListReportsResponse>, ApiError> {
    let reports = state.report_repo.list_all().await?;
    let data: Vec<ReportResponse> = reports.into_iter().map(Into::into).collect();
    let count = data.len();
    Ok(Json(ListReportsResponse { data, count }))
}

pub async fn export_reports_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state.report_repo.list_all().await?;
    let body = formatters::format_reports_csv(&reports)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        body,
    ))
}

pub async fn render_reports_table(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state.report_repo.list_all().await?;
    let body = formatters::format_reports_table(&reports);
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    ))
}
