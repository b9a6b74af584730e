use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::schema::reports;
use paycycle_core::reports::Report;
use paycycle_core::statements::StatementTotals;

/// Database row for one report. The upload date is the primary key and
/// is stored as an ISO-8601 string; amounts are stored as text to keep
/// decimal values exact.
#[derive(Debug, Clone, Queryable, Insertable, AsChangeset, Identifiable)]
#[diesel(table_name = reports)]
#[diesel(primary_key(upload_date))]
pub struct ReportDB {
    pub upload_date: String,
    pub total_deals: i32,
    pub agent_payout: String,
    pub owner_revenue: String,
    pub owner_profit: String,
}

impl ReportDB {
    pub fn from_totals(upload_date: NaiveDate, totals: &StatementTotals) -> Self {
        ReportDB {
            upload_date: upload_date.format("%Y-%m-%d").to_string(),
            total_deals: totals.deals as i32,
            agent_payout: totals.agent_payout.to_string(),
            owner_revenue: totals.owner_revenue.to_string(),
            owner_profit: totals.owner_profit.to_string(),
        }
    }
}

impl From<ReportDB> for Report {
    fn from(db: ReportDB) -> Self {
        // Rows are only ever written by ReportDB::from_totals, so parse
        // failures mean a hand-edited database; degrade to zero rather
        // than poisoning the whole history read.
        Report {
            upload_date: NaiveDate::parse_from_str(&db.upload_date, "%Y-%m-%d")
                .unwrap_or_default(),
            total_deals: db.total_deals.max(0) as u32,
            agent_payout: Decimal::from_str(&db.agent_payout).unwrap_or_default(),
            owner_revenue: Decimal::from_str(&db.owner_revenue).unwrap_or_default(),
            owner_profit: Decimal::from_str(&db.owner_profit).unwrap_or_default(),
        }
    }
}
