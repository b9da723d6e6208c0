use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::tables::{MAX_TABULATED_POWER_KWC, MIN_POWER_KWC, TIER_STEP_KWC};
use crate::types::Money;

// Maximum authorised pre-tax price per 0.5-kWc step from 2 kWc to 36 kWc.
// Installations above 36 kWc are negotiated case by case and have no ceiling.
const CEILINGS: [Decimal; 69] = [
    dec!(5200),
    dec!(5500),
    dec!(6290),
    dec!(6750),
    dec!(7542),
    dec!(8333),
    dec!(9250),
    dec!(10083),
    dec!(10833),
    dec!(11417),
    dec!(12000),
    dec!(12500),
    dec!(13083),
    dec!(13667),
    dec!(14167),
    dec!(14635),
    dec!(15170),
    dec!(15700),
    dec!(16230),
    dec!(16765),
    dec!(17300),
    dec!(17833),
    dec!(18380),
    dec!(18900),
    dec!(19450),
    dec!(20000),
    dec!(20700),
    dec!(21390),
    dec!(22080),
    dec!(22770),
    dec!(23460),
    dec!(24150),
    dec!(24840),
    dec!(25530),
    dec!(26220),
    dec!(26910),
    dec!(27600),
    dec!(28290),
    dec!(28980),
    dec!(29670),
    dec!(30360),
    dec!(31050),
    dec!(31740),
    dec!(32430),
    dec!(33120),
    dec!(33810),
    dec!(34500),
    dec!(35190),
    dec!(35880),
    dec!(36570),
    dec!(37260),
    dec!(37950),
    dec!(38640),
    dec!(39330),
    dec!(40020),
    dec!(40710),
    dec!(41400),
    dec!(42090),
    dec!(42780),
    dec!(43470),
    dec!(44160),
    dec!(44850),
    dec!(45540),
    dec!(46230),
    dec!(46920),
    dec!(47610),
    dec!(48300),
    dec!(48990),
    dec!(49680),
];

/// Maximum authorised pre-tax price for a power rating, or `None` when the
/// installation is above the tabulated range and unconstrained.
pub fn ceiling(power_kwc: Decimal) -> Option<Money> {
    if power_kwc > MAX_TABULATED_POWER_KWC {
        return None;
    }
    let steps = ((power_kwc - MIN_POWER_KWC) / TIER_STEP_KWC)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let index = steps.to_usize().unwrap_or(0).min(CEILINGS.len() - 1);
    Some(CEILINGS[index])
}
