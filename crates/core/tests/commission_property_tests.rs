//! Property-based integration tests for the commission rules engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use paycycle_core::{bonus_for, bonus_progress, next_tier_progress, payout_for, tier_for};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The commission rate never decreases as the paid-deal count grows.
    #[test]
    fn prop_rate_is_non_decreasing(paid_deals in 0u32..1000) {
        let rate = tier_for(paid_deals).rate;
        let next_rate = tier_for(paid_deals + 1).rate;
        prop_assert!(next_rate >= rate);
    }

    /// Payout is at least the tiered commission alone; the bonus only adds.
    #[test]
    fn prop_payout_at_least_tiered_commission(paid_deals in 0u32..1000) {
        let commission = Decimal::from(paid_deals) * tier_for(paid_deals).rate;
        prop_assert!(payout_for(paid_deals) >= commission);
    }

    /// The bonus is a step function: exactly 0 or exactly 1200.
    #[test]
    fn prop_bonus_is_binary(paid_deals in 0u32..1000) {
        let bonus = bonus_for(paid_deals);
        prop_assert!(bonus == dec!(0) || bonus == dec!(1200));
        prop_assert_eq!(bonus == dec!(1200), paid_deals >= 70);
    }

    /// Progress percentages stay inside [0, 100].
    #[test]
    fn prop_progress_is_bounded(paid_deals in 0u32..1000) {
        let tier = next_tier_progress(paid_deals);
        prop_assert!(tier.percent >= dec!(0) && tier.percent <= dec!(100));

        let bonus = bonus_progress(paid_deals);
        prop_assert!(bonus.percent >= dec!(0) && bonus.percent <= dec!(100));
    }

    /// The next milestone, when present, is always strictly ahead of the count.
    #[test]
    fn prop_next_milestone_is_ahead(paid_deals in 0u32..1000) {
        match next_tier_progress(paid_deals).next_threshold {
            Some(threshold) => prop_assert!(threshold > paid_deals),
            None => prop_assert!(paid_deals >= 200),
        }
    }
}
