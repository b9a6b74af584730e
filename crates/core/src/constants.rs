use rust_decimal::Decimal;

/// Gross revenue the agency books per paid deal, in dollars.
pub const OWNER_REVENUE_PER_DEAL: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Margin retained by the agency per paid deal, in dollars.
pub const OWNER_PROFIT_PER_DEAL: Decimal = Decimal::from_parts(43, 0, 0, false, 0);

/// Flat bonus unlocked at [`BONUS_THRESHOLD`] paid deals.
pub const BONUS_AMOUNT: Decimal = Decimal::from_parts(1200, 0, 0, false, 0);

/// Paid-deal count at which the flat bonus unlocks.
pub const BONUS_THRESHOLD: u32 = 70;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
