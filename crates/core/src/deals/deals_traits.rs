use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Result;
use paycycle_crm_client::DealListItem;

use super::deals_model::{AgentCycleSnapshot, DealCounts};

/// Trait defining the contract for deal metric computations.
#[async_trait]
pub trait DealMetricsServiceTrait: Send + Sync {
    /// Computes one agent's full dashboard snapshot for `today`:
    /// current/previous cycle figures plus day/week/month/year counts.
    async fn cycle_snapshot(&self, agent_id: &str, today: NaiveDate)
        -> Result<AgentCycleSnapshot>;

    /// Buckets already-fetched deals by `date_sold` into day/week/month/
    /// year counts relative to `today`. Pure; deals without a parseable
    /// sold date fall out of every bucket.
    fn bucket_counts(&self, deals: &[DealListItem], today: NaiveDate) -> DealCounts;
}
