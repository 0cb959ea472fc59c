use chrono::NaiveDateTime;

use crate::{
    quantity::{cost::Cost, energy::KilowattHours, round_to_thousandths},
    summary::{
        Period,
        record::{Summary, UndefinedOffPeakShare},
    },
    tariff::{block::block_cost, ev::ev_cost},
};

/// Running totals of a month, or of several months when summed up.
///
/// Everything is accumulated with full precision, rounding only happens in [`Totals::finalize`].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
)]
pub struct Totals {
    pub usage: KilowattHours,
    pub block_cost: Cost,
    pub ev_cost: Cost,

    /// Usage during the on-peak hours, never exceeds [`Totals::usage`].
    pub peak_usage: KilowattHours,
}

impl Totals {
    /// Bill the hourly sample under both plans.
    ///
    /// The block tier depends on the usage accumulated so far, so the samples of a month
    /// must be added in their original order.
    pub fn add_sample(&mut self, timestamp: NaiveDateTime, usage: KilowattHours) {
        self.block_cost += block_cost(timestamp, usage, self.usage);
        self.usage += usage;

        let ev = ev_cost(timestamp, usage);
        self.ev_cost += ev.cost;
        if ev.is_peak {
            self.peak_usage += usage;
        }
    }

    #[must_use]
    pub fn difference(&self) -> Cost {
        self.block_cost - self.ev_cost
    }

    /// Share of the usage outside of the on-peak hours, in percent.
    pub fn off_peak_percent(&self, period: Period) -> Result<f64, UndefinedOffPeakShare> {
        if self.usage.0 > 0.0 {
            Ok(100.0 * (self.usage - self.peak_usage).0 / self.usage.0)
        } else {
            Err(UndefinedOffPeakShare { period })
        }
    }

    /// Compute the derived fields and round everything to three decimals.
    pub fn finalize(&self, period: Period) -> (Summary, Option<UndefinedOffPeakShare>) {
        let (off_peak_percent, error) = match self.off_peak_percent(period) {
            Ok(percent) => (Some(round_to_thousandths(percent)), None),
            Err(error) => (None, Some(error)),
        };
        let summary = Summary {
            block_cost: self.block_cost.round_to_thousandths(),
            difference: self.difference().round_to_thousandths(),
            ev_cost: self.ev_cost.round_to_thousandths(),
            usage: self.usage.round_to_thousandths(),
            off_peak_percent,
            peak_usage: self.peak_usage.round_to_thousandths(),
        };
        (summary, error)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        summary::year_month::YearMonth,
        tariff::ev::{OFF_PEAK_RATE, ON_PEAK_RATE},
    };

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_add_sample() {
        let mut totals = Totals::default();
        // Wednesday, on-peak:
        totals.add_sample(at(7, 17, 16), KilowattHours::new(2.0));
        // Wednesday, off-peak:
        totals.add_sample(at(7, 17, 2), KilowattHours::new(1.0));
        assert_abs_diff_eq!(totals.usage.0, 3.0);
        assert_abs_diff_eq!(totals.peak_usage.0, 2.0);
        assert_abs_diff_eq!(
            totals.ev_cost.0,
            2.0 * ON_PEAK_RATE.0 + OFF_PEAK_RATE.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_off_peak_share_is_rounded() {
        let mut totals = Totals::default();
        totals.add_sample(at(7, 17, 16), KilowattHours::new(2.0));
        totals.add_sample(at(7, 17, 2), KilowattHours::new(1.0));
        let (summary, error) = totals.finalize(Period::Overall);
        assert_eq!(summary.off_peak_percent, Some(33.333));
        assert_eq!(error, None);
    }

    #[test]
    fn test_zero_usage_has_no_off_peak_share() {
        let period = Period::Month(YearMonth::new(2024, 2));
        let mut totals = Totals::default();
        totals.add_sample(at(2, 1, 0), KilowattHours::ZERO);
        let (summary, error) = totals.finalize(period);
        assert_eq!(summary.off_peak_percent, None);
        assert_eq!(error, Some(UndefinedOffPeakShare { period }));
    }
}
