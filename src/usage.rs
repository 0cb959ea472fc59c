use chrono::NaiveDateTime;

use crate::quantity::energy::KilowattHours;

/// Consumption during one clock hour.
///
/// The timestamp marks the start of the hour: `12:00` stands for the usage from noon to 1 pm.
/// Times are local wall-clock without a timezone. Usage is never negative, the ingestion
/// adapters reject such rows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UsageSample {
    pub timestamp: NaiveDateTime,
    pub usage: KilowattHours,
}

impl UsageSample {
    pub const fn new(timestamp: NaiveDateTime, usage: KilowattHours) -> Self {
        Self { timestamp, usage }
    }
}
