//! Pure commission math over a paid-deal count.
//!
//! Every function here is total for unsigned input and touches no I/O;
//! callers pass in counts they have already computed.

use rust_decimal::Decimal;

use crate::constants::{BONUS_AMOUNT, BONUS_THRESHOLD};

use super::commissions_model::{BonusProgress, Tier, TierProgress};

const RATE_STARTER: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const RATE_RISING: Decimal = Decimal::from_parts(175, 0, 0, false, 1);
const RATE_PRO: Decimal = Decimal::from_parts(225, 0, 0, false, 1);
const RATE_TOP: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Milestones rendered as a single "next target" bar: the bonus
/// threshold merged with the tier thresholds, ascending.
const MILESTONES: [u32; 4] = [BONUS_THRESHOLD, 120, 150, 200];

/// Maps a paid-deal count to its commission rate band.
pub fn tier_for(paid_deals: u32) -> Tier {
    if paid_deals >= 200 {
        Tier {
            rate: RATE_TOP,
            label: "Top Tier ($25/deal)",
            color: "#13b13b",
        }
    } else if paid_deals >= 150 {
        Tier {
            rate: RATE_PRO,
            label: "Pro Tier ($22.50/deal)",
            color: "#26a7ff",
        }
    } else if paid_deals >= 120 {
        Tier {
            rate: RATE_RISING,
            label: "Rising Tier ($17.50/deal)",
            color: "#fd9800",
        }
    } else {
        Tier {
            rate: RATE_STARTER,
            label: "Starter ($15/deal)",
            color: "#a0a0a0",
        }
    }
}

/// Flat bonus amount: all-or-nothing at the threshold, not prorated.
pub fn bonus_for(paid_deals: u32) -> Decimal {
    if paid_deals >= BONUS_THRESHOLD {
        BONUS_AMOUNT
    } else {
        Decimal::ZERO
    }
}

/// Total payout: tiered commission plus the flat bonus.
pub fn payout_for(paid_deals: u32) -> Decimal {
    Decimal::from(paid_deals) * tier_for(paid_deals).rate + bonus_for(paid_deals)
}

/// Progress toward the next milestone in the merged milestone set.
///
/// Past the last milestone the bar is pinned at 100 with no target.
pub fn next_tier_progress(paid_deals: u32) -> TierProgress {
    let next_threshold = MILESTONES.into_iter().find(|&t| paid_deals < t);

    let percent = match next_threshold {
        Some(threshold) => {
            (Decimal::from(paid_deals) * HUNDRED / Decimal::from(threshold)).min(HUNDRED)
        }
        None => HUNDRED,
    };

    TierProgress {
        next_threshold,
        percent,
    }
}

/// Progress toward the flat bonus, capped at 100.
pub fn bonus_progress(paid_deals: u32) -> BonusProgress {
    BonusProgress {
        threshold: BONUS_THRESHOLD,
        percent: (Decimal::from(paid_deals) * HUNDRED / Decimal::from(BONUS_THRESHOLD))
            .min(HUNDRED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for(0).rate, dec!(15));
        assert_eq!(tier_for(119).rate, dec!(15));
        assert_eq!(tier_for(120).rate, dec!(17.5));
        assert_eq!(tier_for(149).rate, dec!(17.5));
        assert_eq!(tier_for(150).rate, dec!(22.5));
        assert_eq!(tier_for(199).rate, dec!(22.5));
        assert_eq!(tier_for(200).rate, dec!(25));
        assert_eq!(tier_for(1000).rate, dec!(25));
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(tier_for(0).label, "Starter ($15/deal)");
        assert_eq!(tier_for(130).label, "Rising Tier ($17.50/deal)");
        assert_eq!(tier_for(160).label, "Pro Tier ($22.50/deal)");
        assert_eq!(tier_for(250).label, "Top Tier ($25/deal)");
    }

    #[test]
    fn test_bonus_step_function() {
        assert_eq!(bonus_for(0), dec!(0));
        assert_eq!(bonus_for(69), dec!(0));
        assert_eq!(bonus_for(70), dec!(1200));
        assert_eq!(bonus_for(200), dec!(1200));
    }

    #[test]
    fn test_payout_combines_rate_and_bonus() {
        // Below the bonus threshold: rate only
        assert_eq!(payout_for(1), dec!(15));
        assert_eq!(payout_for(69), dec!(1035));
        // At the threshold the bonus lands in full
        assert_eq!(payout_for(70), dec!(70) * dec!(15) + dec!(1200));
        // Tier rate and bonus together
        assert_eq!(payout_for(150), dec!(150) * dec!(22.5) + dec!(1200));
    }

    #[test]
    fn test_next_tier_progress_at_zero() {
        let progress = next_tier_progress(0);
        assert_eq!(progress.next_threshold, Some(70));
        assert_eq!(progress.percent, dec!(0));
    }

    #[test]
    fn test_next_tier_progress_steps_through_milestones() {
        assert_eq!(next_tier_progress(69).next_threshold, Some(70));
        assert_eq!(next_tier_progress(70).next_threshold, Some(120));
        assert_eq!(next_tier_progress(120).next_threshold, Some(150));
        assert_eq!(next_tier_progress(150).next_threshold, Some(200));
    }

    #[test]
    fn test_next_tier_progress_past_last_milestone() {
        let progress = next_tier_progress(200);
        assert_eq!(progress.next_threshold, None);
        assert_eq!(progress.percent, dec!(100));
    }

    #[test]
    fn test_progress_percent_is_fraction_of_target() {
        let progress = next_tier_progress(35);
        assert_eq!(progress.next_threshold, Some(70));
        assert_eq!(progress.percent, dec!(50));
    }

    #[test]
    fn test_bonus_progress_caps_at_hundred() {
        assert_eq!(bonus_progress(35).percent, dec!(50));
        assert_eq!(bonus_progress(70).percent, dec!(100));
        assert_eq!(bonus_progress(500).percent, dec!(100));
        assert_eq!(bonus_progress(0).threshold, 70);
    }
}
