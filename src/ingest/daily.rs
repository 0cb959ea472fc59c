use std::path::Path;

use chrono::NaiveDate;

use crate::{
    ingest::{UsageSource, csv_reader, parse_hour_label},
    prelude::*,
    quantity::energy::KilowattHours,
    usage::UsageSample,
};

/// One file per day as exported by the utility's web portal.
///
/// The date only comes from the `YYYY-MM-DD.csv` file name. Rows are labelled by the end of
/// the hour: `13:00` is the usage from noon to 1 pm.
pub struct DailyFiles;

impl UsageSource for DailyFiles {
    fn read_file(&self, path: &Path) -> Result<Vec<UsageSample>> {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        let Ok(date) = NaiveDate::parse_from_str(&file_name, "%Y-%m-%d.csv") else {
            warn!(path = %path.display(), "file name does not match `YYYY-MM-DD.csv`, skipping");
            return Ok(Vec::new());
        };
        csv_reader(path)?
            .deserialize::<(String, f64)>()
            .map(|row| -> Result<UsageSample> {
                let (label, usage) = row?;
                ensure!(usage >= 0.0, "negative usage `{usage}` for `{label}`");
                let hour = parse_hour_label(&label)?
                    .checked_sub(1)
                    .with_context(|| format!("`{label}` does not end an hour"))?;
                let timestamp = date
                    .and_hms_opt(hour, 0, 0)
                    .with_context(|| format!("`{label}` is out of the day"))?;
                Ok(UsageSample::new(timestamp, KilowattHours::new(usage)))
            })
            .collect()
    }
}
