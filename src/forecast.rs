use chrono::{NaiveDateTime, TimeDelta, Timelike};

use crate::{prelude::*, tariff::peak::is_peak_hour};

/// The peak status always flips within a week, this is a safety net.
const MAX_LOOKAHEAD: TimeDelta = TimeDelta::days(14);

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PeakChange {
    /// Status at the reference time.
    pub is_peak: bool,

    /// Hour boundary at which the status flips.
    pub at: NaiveDateTime,

    /// Time left until the flip.
    pub after: TimeDelta,
}

/// Find the next hour boundary at which the peak status changes.
///
/// The hour starting at an hour-aligned `since` has the current status by definition,
/// so the search always starts at the next full hour.
pub fn next_change(since: NaiveDateTime) -> Result<PeakChange> {
    let is_peak = is_peak_hour(since);
    let start_of_hour = since
        .with_minute(0)
        .and_then(|timestamp| timestamp.with_second(0))
        .and_then(|timestamp| timestamp.with_nanosecond(0))
        .context("failed to truncate the timestamp to the hour")?;
    let mut at = start_of_hour + TimeDelta::hours(1);
    while is_peak_hour(at) == is_peak {
        at += TimeDelta::hours(1);
        ensure!(at - since <= MAX_LOOKAHEAD, "no peak status change within {MAX_LOOKAHEAD}");
    }
    Ok(PeakChange { is_peak, at, after: at - since })
}
