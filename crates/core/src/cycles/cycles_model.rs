use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One biweekly commission accounting period.
///
/// Periods are 14 days, inclusive on both ends, and are paid out on a
/// later `pay` date. `index` is the position in the configured calendar
/// and is what "previous cycle" lookups are based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionCycle {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub pay: NaiveDate,
    pub index: usize,
}

impl CommissionCycle {
    /// Whether `date` falls inside this cycle's inclusive `[start, end]` window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
