use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::try_join;
use log::debug;

use crate::commissions::{bonus_for, bonus_progress, next_tier_progress, payout_for, tier_for};
use crate::cycles::{CommissionCycle, CycleCalendar};
use crate::utils::time_utils::{month_start, week_start, year_start};
use crate::Result;
use paycycle_crm_client::{DealListItem, DealProvider};

use super::deals_model::{AgentCycleSnapshot, DealCounts};
use super::deals_traits::DealMetricsServiceTrait;

/// Computes dashboard metrics from the CRM deal feed.
///
/// The rules engine only needs counts per window, so this service fetches
/// the relevant date ranges, counts, and hands the counts to the pure
/// commission math. All ranges are fetched concurrently; one failed range
/// fails the snapshot (no partially-populated dashboards).
pub struct DealMetricsService {
    deal_provider: Arc<dyn DealProvider>,
    calendar: CycleCalendar,
}

impl DealMetricsService {
    pub fn new(deal_provider: Arc<dyn DealProvider>, calendar: CycleCalendar) -> Self {
        DealMetricsService {
            deal_provider,
            calendar,
        }
    }

    async fn fetch_range(
        &self,
        agent_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<DealListItem>> {
        Ok(self
            .deal_provider
            .fetch_agent_deals(agent_id, date_from, date_to)
            .await?)
    }

    /// Fetches an agent's deals for a cycle window, or nothing when the
    /// cycle is absent.
    async fn fetch_cycle_deals(
        &self,
        agent_id: &str,
        cycle: Option<&CommissionCycle>,
    ) -> Result<Vec<DealListItem>> {
        match cycle {
            Some(cycle) => self.fetch_range(agent_id, cycle.start, cycle.end).await,
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl DealMetricsServiceTrait for DealMetricsService {
    async fn cycle_snapshot(
        &self,
        agent_id: &str,
        today: NaiveDate,
    ) -> Result<AgentCycleSnapshot> {
        let current = self.calendar.current_cycle(today).copied();
        let previous = self.calendar.previous_cycle(today).copied();

        if current.is_none() {
            // Outside the configured calendar there is no cycle to
            // query; the remaining buckets are still meaningful.
            debug!("No active commission cycle for {}", today);
        }

        let (cycle_deals, previous_deals, today_deals, week_deals, month_deals, year_deals) =
            try_join!(
                self.fetch_cycle_deals(agent_id, current.as_ref()),
                self.fetch_cycle_deals(agent_id, previous.as_ref()),
                self.fetch_range(agent_id, today, today),
                self.fetch_range(agent_id, week_start(today), today),
                self.fetch_range(agent_id, month_start(today), today),
                self.fetch_range(agent_id, year_start(today), today),
            )?;

        let deals = cycle_deals.len() as u32;
        let previous_count = previous_deals.len() as u32;

        Ok(AgentCycleSnapshot {
            current_cycle: current,
            previous_cycle: previous,
            cycle_deals: deals,
            previous_cycle_deals: previous_count,
            tier: tier_for(deals),
            bonus: bonus_for(deals),
            payout: payout_for(deals),
            previous_payout: payout_for(previous_count),
            tier_progress: next_tier_progress(deals),
            bonus_progress: bonus_progress(deals),
            counts: DealCounts {
                daily: today_deals.len() as u32,
                weekly: week_deals.len() as u32,
                monthly: month_deals.len() as u32,
                yearly: year_deals.len() as u32,
            },
        })
    }

    fn bucket_counts(&self, deals: &[DealListItem], today: NaiveDate) -> DealCounts {
        let week = week_start(today);
        let month = month_start(today);
        let year = year_start(today);

        let mut counts = DealCounts::default();
        for day in deals.iter().filter_map(DealListItem::date_sold_day) {
            if day == today {
                counts.daily += 1;
            }
            if day >= week {
                counts.weekly += 1;
            }
            if day >= month {
                counts.monthly += 1;
            }
            if day >= year {
                counts.yearly += 1;
            }
        }
        counts
    }
}
