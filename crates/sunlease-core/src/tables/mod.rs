pub mod ceilings;
pub mod rates;
pub mod residuals;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest subscribable installation, in kWc.
pub const MIN_POWER_KWC: Decimal = dec!(2);

/// Largest tabulated installation. Above this the top-tier rate applies and
/// no price ceiling is enforced.
pub const MAX_TABULATED_POWER_KWC: Decimal = dec!(36);

/// Tier granularity, in kWc.
pub const TIER_STEP_KWC: Decimal = dec!(0.5);

/// Number of rate tiers per duration.
pub const RATE_TIER_COUNT: usize = 26;

/// Rate tier for a power rating: 0.5-kWc steps from 2 kWc, clamped to the
/// top tier. Powers above the tabulated range share the top tier.
pub fn rate_tier(power_kwc: Decimal) -> usize {
    if power_kwc > MAX_TABULATED_POWER_KWC {
        return RATE_TIER_COUNT - 1;
    }
    let steps = ((power_kwc - MIN_POWER_KWC) / TIER_STEP_KWC).floor();
    steps.to_usize().unwrap_or(0).min(RATE_TIER_COUNT - 1)
}
