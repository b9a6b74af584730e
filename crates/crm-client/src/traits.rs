use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::CrmError;
use crate::models::{AgentRecord, DealListItem};

/// Trait defining the contract for deal queries against the CRM.
#[async_trait]
pub trait DealProvider: Send + Sync {
    /// Deals sold by one agent with `date_sold` inside `[date_from, date_to]`.
    async fn fetch_agent_deals(
        &self,
        agent_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<DealListItem>, CrmError>;

    /// All deals created on or after `date_from`, across agents.
    /// Implementations follow the endpoint's pagination internally and
    /// must not return a page twice.
    async fn fetch_deals_since(&self, date_from: NaiveDate) -> Result<Vec<DealListItem>, CrmError>;
}

/// Trait defining the contract for the agent directory lookup.
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    async fn fetch_agents(&self) -> Result<Vec<AgentRecord>, CrmError>;
}
