use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Result;

use super::statements_model::{DealRecord, StatementSummary};

/// Trait defining the contract for statement ingestion operations.
#[async_trait]
pub trait StatementServiceTrait: Send + Sync {
    /// Runs the full pipeline over raw statement bytes - parse, normalize,
    /// filter, aggregate - then records the totals in the report history
    /// under `upload_date`. Nothing is persisted when any stage fails.
    async fn import_statement(
        &self,
        content: &[u8],
        upload_date: NaiveDate,
    ) -> Result<StatementSummary>;

    /// The aggregate stage alone: canonical records to leaderboard and
    /// totals. Pure, no persistence.
    fn summarize(&self, records: &[DealRecord]) -> StatementSummary;
}
