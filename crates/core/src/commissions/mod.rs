//! Commission rules module - tier bands, bonus, payout, and progress math.

mod commissions_model;
mod commissions_rules;

pub use commissions_model::{BonusProgress, Tier, TierProgress};
pub use commissions_rules::{
    bonus_for, bonus_progress, next_tier_progress, payout_for, tier_for,
};
