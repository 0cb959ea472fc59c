pub mod record;
pub mod totals;
pub mod year_month;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    prelude::*,
    summary::{
        record::{Summary, UndefinedOffPeakShare},
        totals::Totals,
        year_month::YearMonth,
    },
    usage::UsageSample,
};

/// Either a single month or the whole input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Period {
    #[display("{_0}")]
    Month(YearMonth),

    #[display("{}", Report::SUMMARY_KEY)]
    Overall,
}

/// Folds hourly samples into monthly totals.
#[must_use]
#[derive(Default)]
pub struct Aggregator {
    months: BTreeMap<YearMonth, Totals>,
}

impl Aggregator {
    pub fn push(&mut self, sample: UsageSample) {
        let month = YearMonth::from(sample.timestamp);
        self.months
            .entry(month)
            .or_insert_with(|| {
                debug!(%month, "first sample of the month");
                Totals::default()
            })
            .add_sample(sample.timestamp, sample.usage);
    }

    /// Compute the derived fields and the overall summary.
    ///
    /// Consumes the aggregator, so that percentages never come from partial sums.
    pub fn finalize(self) -> Report {
        let mut errors = Vec::new();
        let mut months = BTreeMap::new();
        for (month, totals) in &self.months {
            let (summary, error) = totals.finalize(Period::Month(*month));
            errors.extend(error);
            months.insert(*month, summary);
        }
        let (overall, error) = self.months.into_values().sum::<Totals>().finalize(Period::Overall);
        errors.extend(error);
        Report { months, overall, errors }
    }
}

impl Extend<UsageSample> for Aggregator {
    fn extend<T: IntoIterator<Item = UsageSample>>(&mut self, iterator: T) {
        for sample in iterator {
            self.push(sample);
        }
    }
}

impl FromIterator<UsageSample> for Aggregator {
    fn from_iter<T: IntoIterator<Item = UsageSample>>(iterator: T) -> Self {
        let mut this = Self::default();
        this.extend(iterator);
        this
    }
}

/// Summarize the samples in their encounter order.
pub fn summarize(samples: impl IntoIterator<Item = UsageSample>) -> Report {
    samples.into_iter().collect::<Aggregator>().finalize()
}

#[must_use]
pub struct Report {
    pub months: BTreeMap<YearMonth, Summary>,

    /// All months together.
    pub overall: Summary,

    /// Periods which summaries could not be completely computed.
    pub errors: Vec<UndefinedOffPeakShare>,
}

impl Report {
    pub const SUMMARY_KEY: &'static str = "SUMMARY";

    /// Render as JSON: months in chronological order, followed by the overall summary.
    pub fn to_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.months.len() + 1))?;
        for (month, summary) in &self.months {
            map.serialize_entry(month, summary)?;
        }
        map.serialize_entry(Self::SUMMARY_KEY, &self.overall)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use super::*;
    use crate::{
        quantity::energy::KilowattHours,
        tariff::{block::BlockRates, ev::OFF_PEAK_RATE},
    };

    fn hourly_samples(
        (year, month, day): (i32, u32, u32),
        n_days: i64,
        usage: f64,
    ) -> impl Iterator<Item = UsageSample> {
        let start = at(year, month, day, 0);
        (0..n_days * 24).map(move |hour| {
            UsageSample::new(start + TimeDelta::hours(hour), KilowattHours::new(usage))
        })
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_single_winter_weekday() {
        // Tuesday, January 16th, 2024.
        let report = summarize(hourly_samples((2024, 1, 16), 1, 1.0));
        let summary = report.months[&YearMonth::new(2024, 1)];
        assert_abs_diff_eq!(summary.usage.0, 24.0);
        assert_abs_diff_eq!(summary.peak_usage.0, 7.0);
        assert_abs_diff_eq!(summary.off_peak_percent.unwrap(), 70.833);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_full_january() {
        let report = summarize(hourly_samples((2024, 1, 1), 31, 1.0));
        assert_eq!(report.months.len(), 1);
        let summary = report.months[&YearMonth::new(2024, 1)];
        assert_abs_diff_eq!(summary.usage.0, 744.0);

        let rates = BlockRates::WINTER;
        let expected_block_cost = 400.0 * rates.low.0 + 344.0 * rates.high.0;
        assert_abs_diff_eq!(summary.block_cost.0, expected_block_cost, epsilon = 0.001);

        // 23 weekdays minus New Year's Day, 7 peak hours each.
        assert_abs_diff_eq!(summary.peak_usage.0, 22.0 * 7.0);
        assert_abs_diff_eq!(
            summary.difference.0,
            (summary.block_cost - summary.ev_cost).0,
            epsilon = 0.002
        );
        assert_eq!(report.overall, summary);
    }

    #[test]
    fn test_months_are_independent() {
        let samples = [
            UsageSample::new(at(2024, 1, 31, 23), KilowattHours::new(450.0)),
            UsageSample::new(at(2024, 2, 1, 0), KilowattHours::new(10.0)),
        ];
        let report = summarize(samples);
        let february = report.months[&YearMonth::new(2024, 2)];
        // February starts over in the first block.
        let expected_block_cost = KilowattHours::new(10.0) * BlockRates::WINTER.low;
        assert_abs_diff_eq!(february.block_cost.0, expected_block_cost.round_to_thousandths().0);
        let expected_ev_cost = KilowattHours::new(10.0) * OFF_PEAK_RATE;
        assert_abs_diff_eq!(february.ev_cost.0, expected_ev_cost.round_to_thousandths().0);
        assert_abs_diff_eq!(report.overall.usage.0, 460.0);
    }

    #[test]
    fn test_unsorted_input() {
        let samples = [
            UsageSample::new(at(2024, 3, 5, 12), KilowattHours::new(1.0)),
            UsageSample::new(at(2023, 11, 5, 12), KilowattHours::new(2.0)),
            UsageSample::new(at(2024, 3, 1, 12), KilowattHours::new(3.0)),
        ];
        let report = summarize(samples);
        assert_eq!(
            report.months.keys().copied().collect::<Vec<_>>(),
            [YearMonth::new(2023, 11), YearMonth::new(2024, 3)],
        );
        assert_abs_diff_eq!(report.months[&YearMonth::new(2024, 3)].usage.0, 4.0);
    }

    #[test]
    fn test_zero_usage_month_is_reported() {
        let samples = [
            UsageSample::new(at(2024, 4, 2, 12), KilowattHours::ZERO),
            UsageSample::new(at(2024, 5, 2, 12), KilowattHours::new(1.0)),
        ];
        let report = summarize(samples);
        assert_eq!(report.months[&YearMonth::new(2024, 4)].off_peak_percent, None);
        assert_eq!(report.months[&YearMonth::new(2024, 5)].off_peak_percent, Some(100.0));
        assert_eq!(
            report.errors,
            [UndefinedOffPeakShare { period: Period::Month(YearMonth::new(2024, 4)) }],
        );
        assert_eq!(
            report.errors[0].to_string(),
            "off-peak share of 2024-04 is undefined: no usage",
        );
    }

    #[test]
    fn test_empty_input() {
        let report = summarize([]);
        assert!(report.months.is_empty());
        assert_eq!(report.errors, [UndefinedOffPeakShare { period: Period::Overall }]);
    }

    #[test]
    fn test_json() {
        let samples = [
            // Wednesday, on-peak:
            UsageSample::new(at(2024, 7, 17, 16), KilowattHours::new(1.0)),
            UsageSample::new(at(2024, 6, 2, 3), KilowattHours::ZERO),
        ];
        let json = summarize(samples).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keys = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, ["2024-06", "2024-07", "SUMMARY"]);
        assert!(value["2024-06"].get("off_peak_%").is_none());
        assert_abs_diff_eq!(value["2024-07"]["off_peak_%"].as_f64().unwrap(), 0.0);
        assert_abs_diff_eq!(value["SUMMARY"]["sum_peak_kWh"].as_f64().unwrap(), 1.0);
        assert!(json.contains("\n    \"2024-06\": {\n        \"block_cost\": 0.0,"));
    }
}
