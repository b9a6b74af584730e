use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commissions::{BonusProgress, Tier, TierProgress};
use crate::cycles::CommissionCycle;

/// Deal counts bucketed by calendar period, all ending "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealCounts {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
    pub yearly: u32,
}

/// Everything an agent's dashboard shows for one point in time.
///
/// When `today` falls outside the configured calendar there is no cycle
/// to query and the cycle figures are zero; the calendar-independent
/// buckets are still populated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCycleSnapshot {
    pub current_cycle: Option<CommissionCycle>,
    pub previous_cycle: Option<CommissionCycle>,
    /// Deals sold inside the current cycle window.
    pub cycle_deals: u32,
    pub previous_cycle_deals: u32,
    pub tier: Tier,
    pub bonus: Decimal,
    pub payout: Decimal,
    pub previous_payout: Decimal,
    pub tier_progress: TierProgress,
    pub bonus_progress: BonusProgress,
    pub counts: DealCounts,
}
