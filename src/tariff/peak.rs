use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::tariff::holiday::is_holiday;

/// Time-of-use season: summer runs from May through September.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    const SUMMER_MONTHS: RangeInclusive<u32> = 5..=9;

    #[must_use]
    pub fn of(month: u32) -> Self {
        if Self::SUMMER_MONTHS.contains(&month) { Self::Summer } else { Self::Winter }
    }

    /// Peak hours as hour-of-day starts: hour `19` covers 7 pm to 8 pm.
    #[must_use]
    pub const fn peak_hours(self) -> &'static [u32] {
        match self {
            Self::Summer => &[15, 16, 17, 18, 19],
            Self::Winter => &[8, 9, 15, 16, 17, 18, 19],
        }
    }
}

/// On-peak hours only happen on weekdays which are not observed holidays.
#[must_use]
pub fn is_peak_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !is_holiday(date)
}

#[must_use]
pub fn is_peak_hour(timestamp: NaiveDateTime) -> bool {
    is_peak_day(timestamp.date())
        && Season::of(timestamp.month()).peak_hours().contains(&timestamp.hour())
}
