use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::commissions::{bonus_for, tier_for};
use crate::constants::{OWNER_PROFIT_PER_DEAL, OWNER_REVENUE_PER_DEAL};
use crate::reports::ReportRepositoryTrait;
use crate::Result;

use super::csv_parser::parse_statement_sheet;
use super::statements_errors::StatementError;
use super::statements_model::{
    normalize_row, AgentSummary, DealRecord, PaidStatus, StatementSummary, StatementTotals,
};
use super::statements_traits::StatementServiceTrait;

/// Statement ingestion pipeline.
///
/// Stages run synchronously over in-memory data; the only await is the
/// report upsert at the very end, which is issued only after the full
/// `{summary, totals}` has been computed.
pub struct StatementService {
    report_repository: Arc<dyn ReportRepositoryTrait>,
}

impl StatementService {
    pub fn new(report_repository: Arc<dyn ReportRepositoryTrait>) -> Self {
        StatementService { report_repository }
    }

    /// Groups usable records by the raw agent string and folds each group
    /// through the rules engine.
    ///
    /// The grouping key is the agent cell exactly as it appeared in the
    /// sheet - case-sensitive, untrimmed beyond cell coercion. Two
    /// spellings of one agent produce two leaderboard rows; payroll
    /// audits match statements against the sheet verbatim.
    fn aggregate(records: &[DealRecord]) -> StatementSummary {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&DealRecord>> = HashMap::new();

        for record in records {
            let key = record.agent.as_str();
            if !groups.contains_key(key) {
                order.push(key);
            }
            groups.entry(key).or_default().push(record);
        }

        let mut summary = Vec::with_capacity(order.len());
        let mut totals = StatementTotals::default();

        for agent in order {
            let rows = &groups[agent];
            let paid_deals = rows
                .iter()
                .filter(|r| r.paid_status == PaidStatus::Paid)
                .count() as u32;

            let rate = tier_for(paid_deals).rate;
            let payout = Decimal::from(paid_deals) * rate + bonus_for(paid_deals);
            let owner_profit = Decimal::from(paid_deals) * OWNER_PROFIT_PER_DEAL;
            let net_paid: Decimal = rows.iter().map(|r| r.advance).sum();

            totals.deals += paid_deals;
            totals.agent_payout += payout;
            totals.owner_revenue += Decimal::from(paid_deals) * OWNER_REVENUE_PER_DEAL;
            totals.owner_profit += owner_profit;

            summary.push(AgentSummary {
                agent: agent.to_string(),
                paid_deals,
                agent_payout: payout,
                owner_profit,
                net_paid,
            });
        }

        StatementSummary { summary, totals }
    }
}

#[async_trait]
impl StatementServiceTrait for StatementService {
    async fn import_statement(
        &self,
        content: &[u8],
        upload_date: NaiveDate,
    ) -> Result<StatementSummary> {
        let sheet = parse_statement_sheet(content)?;
        if sheet.rows.is_empty() {
            return Err(StatementError::EmptyInput.into());
        }

        let records: Vec<DealRecord> = sheet
            .rows
            .iter()
            .map(|row| normalize_row(&sheet.headers, row))
            .collect();

        let usable: Vec<DealRecord> = records.into_iter().filter(DealRecord::is_usable).collect();
        if usable.is_empty() {
            warn!(
                "Statement for {} had {} rows, none usable",
                upload_date,
                sheet.rows.len()
            );
            return Err(StatementError::NoUsableRows {
                dropped: sheet.rows.len(),
            }
            .into());
        }

        let result = Self::aggregate(&usable);
        debug!(
            "Statement for {}: {} agents, {} paid deals",
            upload_date,
            result.summary.len(),
            result.totals.deals
        );

        self.report_repository
            .upsert_report(upload_date, &result.totals)
            .await?;

        Ok(result)
    }

    fn summarize(&self, records: &[DealRecord]) -> StatementSummary {
        Self::aggregate(records)
    }
}
