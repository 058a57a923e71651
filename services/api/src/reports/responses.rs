use chrono::{DateTime, Utc};
use cysafe_db::reports::models::{HowReceived, ScamReport, ScamType};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: i64,
    pub scam_url: String,
    pub scam_type: ScamType,
    pub how_received: Option<HowReceived>,
    pub details: String,
    pub contact_email: Option<String>,
    pub date_submitted: DateTime<Utc>,
}

impl From<ScamReport> for ReportResponse {
    fn from(report: ScamReport) -> Self {
        Self {
            id: report.id,
            scam_url: report.scam_url,
            scam_type: report.scam_type,
            how_received: report.how_received,
            details: report.details,
            contact_email: report.contact_email,
            date_submitted: report.date_submitted,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListReportsResponse {
    pub data: Vec<ReportResponse>,
    pub count: usize,
}
