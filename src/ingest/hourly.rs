use std::path::Path;

use chrono::NaiveDate;

use crate::{
    ingest::{UsageSource, csv_reader, parse_hour_label},
    prelude::*,
    quantity::energy::KilowattHours,
    usage::UsageSample,
};

/// Alternative export: every row carries its own date, labelled by the start of the hour.
///
/// ```text
/// Date,Time,Usage
/// 1/1/2024,0:00,0.685
/// 1/1/2024,1:00,0.724
/// ```
pub struct HourlyRows;

impl UsageSource for HourlyRows {
    fn read_file(&self, path: &Path) -> Result<Vec<UsageSample>> {
        csv_reader(path)?
            .deserialize::<(String, String, f64)>()
            .map(|row| -> Result<UsageSample> {
                let (date, label, usage) = row?;
                ensure!(usage >= 0.0, "negative usage `{usage}` for `{label}`");
                let date = NaiveDate::parse_from_str(&date, "%m/%d/%Y")
                    .with_context(|| format!("`{date}` is not an `M/D/YYYY` date"))?;
                let timestamp = date
                    .and_hms_opt(parse_hour_label(&label)?, 0, 0)
                    .with_context(|| format!("`{label}` is out of the day"))?;
                Ok(UsageSample::new(timestamp, KilowattHours::new(usage)))
            })
            .collect()
    }
}
