use async_trait::async_trait;

use crate::reports::models::{NewScamReport, ScamReport};
use cysafe_common::error::CysafeResult;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a new report, assigning the id and submission timestamp.
    async fn append(&self, report: NewScamReport) -> CysafeResult<ScamReport>;

    /// All reports, newest first. Unbounded; the listing page shows
    /// everything.
    async fn list_all(&self) -> CysafeResult<Vec<ScamReport>>;
}
