use chrono::{Datelike, Days, NaiveDate, Weekday};
use enumset::EnumSet;

/// Holidays observed by the time-of-use schedule.
///
/// No other federal or state holidays make a weekday off-peak.
#[derive(Debug, enumset::EnumSetType)]
pub enum Holiday {
    NewYearsDay,
    PresidentsDay,
    MemorialDay,
    IndependenceDay,
    PioneerDay,
    LaborDay,
    ThanksgivingDay,
    ChristmasDay,
}

impl Holiday {
    /// Calendar date of the holiday itself, before the weekend shift.
    #[must_use]
    pub fn nominal_date(self, year: i32) -> Option<NaiveDate> {
        match self {
            Self::NewYearsDay => NaiveDate::from_ymd_opt(year, 1, 1),
            Self::PresidentsDay => NaiveDate::from_weekday_of_month_opt(year, 2, Weekday::Mon, 3),
            Self::MemorialDay => last_weekday_of_month(year, 5, Weekday::Mon),
            Self::IndependenceDay => NaiveDate::from_ymd_opt(year, 7, 4),
            Self::PioneerDay => NaiveDate::from_ymd_opt(year, 7, 24),
            Self::LaborDay => NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1),
            Self::ThanksgivingDay => NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Thu, 4),
            Self::ChristmasDay => NaiveDate::from_ymd_opt(year, 12, 25),
        }
    }

    /// Date on which the holiday is observed.
    ///
    /// Saturday holidays move to the preceding Friday, Sunday holidays to the following Monday.
    /// Note that the New Year's Day may thus be observed in the previous year.
    #[must_use]
    pub fn observed_date(self, year: i32) -> Option<NaiveDate> {
        let nominal = self.nominal_date(year)?;
        match nominal.weekday() {
            Weekday::Sat => nominal.checked_sub_days(Days::new(1)),
            Weekday::Sun => nominal.checked_add_days(Days::new(1)),
            _ => Some(nominal),
        }
    }
}

/// Observed holiday dates for the given year, in calendar order.
pub fn observed_holidays(year: i32) -> impl Iterator<Item = (Holiday, NaiveDate)> {
    EnumSet::<Holiday>::all()
        .into_iter()
        .filter_map(move |holiday| Some((holiday, holiday.observed_date(year)?)))
}

/// Find the observed holiday on the date, if any.
#[must_use]
pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    // The next year's New Year's Day may be observed on December 31.
    [date.year(), date.year() + 1]
        .into_iter()
        .flat_map(observed_holidays)
        .find_map(|(holiday, observed)| (observed == date).then_some(holiday))
}

/// Whether the date is an observed holiday of its own year, or the next year's New Year's Day
/// observed on December 31.
#[must_use]
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_on(date).is_some()
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last_day = first_of_next_month.pred_opt()?;
    let days_back = (7 + last_day.weekday().num_days_from_monday()
        - weekday.num_days_from_monday())
        % 7;
    last_day.checked_sub_days(Days::new(u64::from(days_back)))
}
