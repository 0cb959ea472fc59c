//! Rocky Mountain Power (Utah) residential tariffs.

pub mod block;
pub mod ev;
pub mod holiday;
pub mod peak;

use crate::quantity::rate::KilowattHourRate;

/// Combined fees and taxes on top of the base tariff rates (about 36.72%).
pub const FEES_AND_TAXES: f64 = 1.3672;

/// Tariff sheet rate in cents per kilowatt-hour, with [`FEES_AND_TAXES`] applied.
const fn billed_rate(cents: f64) -> KilowattHourRate {
    KilowattHourRate::from_cents(cents * FEES_AND_TAXES)
}
