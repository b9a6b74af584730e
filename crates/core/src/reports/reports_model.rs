use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statements::StatementTotals;

/// Persisted aggregate result of one processed statement.
///
/// At most one report exists per upload date; re-uploading a statement
/// for the same date replaces the stored values rather than appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique key of the report.
    pub upload_date: NaiveDate,
    pub total_deals: u32,
    pub agent_payout: Decimal,
    pub owner_revenue: Decimal,
    pub owner_profit: Decimal,
}

impl Report {
    /// Builds the report row for a statement's totals.
    pub fn from_totals(upload_date: NaiveDate, totals: &StatementTotals) -> Self {
        Report {
            upload_date,
            total_deals: totals.deals,
            agent_payout: totals.agent_payout,
            owner_revenue: totals.owner_revenue,
            owner_profit: totals.owner_profit,
        }
    }
}
