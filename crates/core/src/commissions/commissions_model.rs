use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One commission rate band.
///
/// Bands are keyed by paid-deal-count thresholds, contiguous and
/// non-overlapping, with rates increasing with the threshold. The label
/// and color hint are what the dashboards render next to the rate; both
/// point into the static band table, so this type only serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    /// Commission rate in dollars per paid deal.
    pub rate: Decimal,
    pub label: &'static str,
    pub color: &'static str,
}

/// Progress toward the next milestone in the merged milestone set.
///
/// The milestone set mixes the bonus threshold (70) with the tier
/// thresholds (120/150/200); the dashboard renders them as one bar, so
/// this type does not distinguish bonus milestones from rate milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProgress {
    /// Smallest milestone strictly greater than the paid-deal count,
    /// `None` once every milestone has been reached.
    pub next_threshold: Option<u32>,
    /// Percent of the way to `next_threshold`, capped at 100.
    pub percent: Decimal,
}

/// Progress toward the flat bonus, independent of tier progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusProgress {
    pub threshold: u32,
    pub percent: Decimal,
}
