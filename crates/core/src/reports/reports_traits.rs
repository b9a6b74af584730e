use async_trait::async_trait;
use chrono::NaiveDate;

use crate::statements::StatementTotals;
use crate::Result;

use super::reports_model::Report;

/// Trait defining the contract for report history storage.
///
/// Implementations must keep the collection sorted ascending by upload
/// date with at most one report per date: upserting an existing date
/// replaces that report's values in place.
#[async_trait]
pub trait ReportRepositoryTrait: Send + Sync {
    /// Full report history, ordered ascending by upload date.
    fn get_reports(&self) -> Result<Vec<Report>>;

    /// The report with the maximum upload date, if any exist.
    fn latest_report(&self) -> Result<Option<Report>>;

    /// Inserts the report for `upload_date`, replacing an existing report
    /// for the same date.
    async fn upsert_report(&self, upload_date: NaiveDate, totals: &StatementTotals)
        -> Result<Report>;
}

/// Trait defining the contract for report history operations.
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    fn get_history(&self) -> Result<Vec<Report>>;
    fn latest(&self) -> Result<Option<Report>>;
    async fn record_statement(
        &self,
        upload_date: NaiveDate,
        totals: &StatementTotals,
    ) -> Result<Report>;
}
