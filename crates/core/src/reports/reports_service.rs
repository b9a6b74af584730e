use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use crate::statements::StatementTotals;
use crate::Result;

use super::reports_model::Report;
use super::reports_traits::{ReportRepositoryTrait, ReportServiceTrait};

/// Service over the report history store.
///
/// The ordering and upsert-by-date invariants live in the repository;
/// this layer is the application-facing surface the dashboards read
/// history and "latest report" through.
pub struct ReportService {
    report_repository: Arc<dyn ReportRepositoryTrait>,
}

impl ReportService {
    pub fn new(report_repository: Arc<dyn ReportRepositoryTrait>) -> Self {
        ReportService { report_repository }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    fn get_history(&self) -> Result<Vec<Report>> {
        self.report_repository.get_reports()
    }

    fn latest(&self) -> Result<Option<Report>> {
        self.report_repository.latest_report()
    }

    async fn record_statement(
        &self,
        upload_date: NaiveDate,
        totals: &StatementTotals,
    ) -> Result<Report> {
        let report = self
            .report_repository
            .upsert_report(upload_date, totals)
            .await?;
        debug!(
            "Recorded report for {}: {} deals",
            report.upload_date, report.total_deals
        );
        Ok(report)
    }
}
