use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::reports::models::{HowReceived, NewScamReport, ScamReport, ScamType};
use crate::reports::repositories::ReportRepository;
use cysafe_common::error::{CysafeError, CysafeResult};

#[derive(Clone)]
pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn map_report_row(row: SqliteRow) -> CysafeResult<ScamReport> {
        let type_raw: String = row.get("scam_type");
        let scam_type = ScamType::from_str(&type_raw).map_err(CysafeError::Internal)?;

        let received_raw: Option<String> = row.get("how_received");
        let how_received = received_raw
            .as_deref()
            .map(HowReceived::from_str)
            .transpose()
            .map_err(CysafeError::Internal)?;

        Ok(ScamReport {
            id: row.get("id"),
            scam_url: row.get("scam_url"),
            scam_type,
            how_received,
            details: row.get("details"),
            contact_email: row.get("contact_email"),
            date_submitted: row.get("date_submitted"),
        })
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn append(&self, report: NewScamReport) -> CysafeResult<ScamReport> {
        let row = sqlx::query(
            "insert into scam_reports
                 (scam_url, scam_type, how_received, details, contact_email, date_submitted)
             values (?1, ?2, ?3, ?4, ?5, ?6)
             returning id, scam_url, scam_type, how_received, details, contact_email,
                 date_submitted",
        )
        .bind(report.scam_url)
        .bind(report.scam_type.as_str())
        .bind(report.how_received.map(|r| r.as_str()))
        .bind(report.details)
        .bind(report.contact_email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CysafeError::Database(e.to_string()))?;

        Self::map_report_row(row)
    }

    async fn list_all(&self) -> CysafeResult<Vec<ScamReport>> {
        let rows = sqlx::query(
            "select id, scam_url, scam_type, how_received, details, contact_email,
                 date_submitted
             from scam_reports order by id desc",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CysafeError::Database(e.to_string()))?;

        rows.into_iter().map(Self::map_report_row).collect()
    }
}
