use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether a deal's advance was actually paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaidStatus {
    Paid,
    NotPaid,
}

impl PaidStatus {
    /// Derived from the advance amount: paid iff strictly positive.
    pub fn from_advance(advance: Decimal) -> Self {
        if advance > Decimal::ZERO {
            PaidStatus::Paid
        } else {
            PaidStatus::NotPaid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaidStatus::Paid => "Paid",
            PaidStatus::NotPaid => "Not Paid",
        }
    }
}

/// One canonical deal row of a statement, after header aliasing and
/// cell coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    pub agent: String,
    pub first_name: String,
    pub last_name: String,
    pub advance: Decimal,
    pub advance_excluded_reason: String,
    pub effective_date: Option<NaiveDate>,
    pub paid_status: PaidStatus,
}

impl DealRecord {
    /// Rows without an agent and both name fields are subtotal/footer
    /// garbage and never make it into aggregation.
    pub fn is_usable(&self) -> bool {
        !self.agent.is_empty() && !self.first_name.is_empty() && !self.last_name.is_empty()
    }
}

/// Accepted header spellings per canonical field. Sheets from different
/// carriers disagree on capitalization and wording; anything not listed
/// here is ignored.
const AGENT_ALIASES: &[&str] = &["Agent", "agent"];
const FIRST_NAME_ALIASES: &[&str] = &["first_name", "First Name"];
const LAST_NAME_ALIASES: &[&str] = &["last_name", "Last Name"];
const ADVANCE_ALIASES: &[&str] = &["Advance", "advance"];
const REASON_ALIASES: &[&str] = &["Advance Excluded Reason", "Reason"];
const EFF_DATE_ALIASES: &[&str] = &["Eff Date", "Effective_Date"];

/// Maps one raw sheet row to a canonical [`DealRecord`].
///
/// Missing fields default to empty string / zero, and cells that fail to
/// coerce degrade to those defaults rather than failing the batch. Text
/// cells are carried verbatim: the agent cell in particular is the
/// downstream grouping key and must not be trimmed or case-folded.
pub fn normalize_row(headers: &[String], row: &[String]) -> DealRecord {
    let field = |aliases: &[&str]| -> String {
        aliases
            .iter()
            .find_map(|alias| {
                headers
                    .iter()
                    .position(|h| h == alias)
                    .and_then(|idx| row.get(idx))
            })
            .cloned()
            .unwrap_or_default()
    };

    let advance = parse_advance_amount(&field(ADVANCE_ALIASES));

    DealRecord {
        agent: field(AGENT_ALIASES),
        first_name: field(FIRST_NAME_ALIASES),
        last_name: field(LAST_NAME_ALIASES),
        advance,
        advance_excluded_reason: field(REASON_ALIASES),
        effective_date: parse_effective_date(&field(EFF_DATE_ALIASES)),
        paid_status: PaidStatus::from_advance(advance),
    }
}

/// Tolerant money parsing for statement cells: currency symbols and
/// thousands separators stripped, anything unparseable is zero.
pub fn parse_advance_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Effective dates show up as ISO or US-style strings depending on the
/// export. Unparseable values degrade to empty.
fn parse_effective_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Aggregate for one distinct agent key in a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub agent: String,
    pub paid_deals: u32,
    pub agent_payout: Decimal,
    pub owner_profit: Decimal,
    /// Sum of advances over all of the agent's rows, paid or not.
    pub net_paid: Decimal,
}

/// Statement-wide sums over the per-agent aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementTotals {
    pub deals: u32,
    pub agent_payout: Decimal,
    pub owner_revenue: Decimal,
    pub owner_profit: Decimal,
}

/// Output of a processed statement: the per-agent leaderboard and the
/// statement totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSummary {
    pub summary: Vec<AgentSummary>,
    pub totals: StatementTotals,
}
