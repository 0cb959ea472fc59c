//! Schedule 1: two-block residential service.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDateTime};

use crate::{
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::billed_rate,
};

/// Monthly usage billed at the lower rate.
pub const FIRST_BLOCK: KilowattHours = KilowattHours::new(400.0);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlockRates {
    /// Applies to the first [`FIRST_BLOCK`] of the month.
    pub low: KilowattHourRate,

    /// Applies to everything above it.
    pub high: KilowattHourRate,
}

impl BlockRates {
    /// June through September.
    pub const SUMMER: Self = Self { low: billed_rate(9.0279), high: billed_rate(11.7210) };

    /// October through May.
    pub const WINTER: Self = Self { low: billed_rate(7.9893), high: billed_rate(10.3725) };

    const SUMMER_MONTHS: RangeInclusive<u32> = 6..=9;

    #[must_use]
    pub fn for_month(month: u32) -> Self {
        if Self::SUMMER_MONTHS.contains(&month) { Self::SUMMER } else { Self::WINTER }
    }

    /// Split the sample into the low-rate and high-rate parts.
    ///
    /// `month_usage` is the usage already billed this month, before the sample.
    #[must_use]
    pub fn split(
        month_usage: KilowattHours,
        usage: KilowattHours,
    ) -> (KilowattHours, KilowattHours) {
        if month_usage + usage <= FIRST_BLOCK {
            (usage, KilowattHours::ZERO)
        } else if month_usage < FIRST_BLOCK {
            let low = FIRST_BLOCK - month_usage;
            (low, usage - low)
        } else {
            (KilowattHours::ZERO, usage)
        }
    }

    #[must_use]
    pub fn cost(self, month_usage: KilowattHours, usage: KilowattHours) -> Cost {
        let (low, high) = Self::split(month_usage, usage);
        low * self.low + high * self.high
    }
}

/// Incremental cost of the hourly sample, given the usage accumulated so far in its month.
#[must_use]
pub fn block_cost(
    timestamp: NaiveDateTime,
    usage: KilowattHours,
    month_usage: KilowattHours,
) -> Cost {
    BlockRates::for_month(timestamp.month()).cost(month_usage, usage)
}
