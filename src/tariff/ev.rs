//! Schedule 2E: time-of-use service for electric vehicle owners, rate option 1.

use chrono::NaiveDateTime;

use crate::{
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::{billed_rate, peak::is_peak_hour},
};

pub const ON_PEAK_RATE: KilowattHourRate = billed_rate(25.3532);

pub const OFF_PEAK_RATE: KilowattHourRate = billed_rate(5.2004);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EvCharge {
    pub cost: Cost,
    pub is_peak: bool,
}

/// Cost of the hourly sample under the flat on-peak and off-peak rates.
#[must_use]
pub fn ev_cost(timestamp: NaiveDateTime, usage: KilowattHours) -> EvCharge {
    let is_peak = is_peak_hour(timestamp);
    let rate = if is_peak { ON_PEAK_RATE } else { OFF_PEAK_RATE };
    EvCharge { cost: usage * rate, is_peak }
}
