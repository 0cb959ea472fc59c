//! Usage exports in CSV, one capability with two file formats.

mod daily;
mod hourly;

use std::path::Path;

use itertools::Itertools;
use walkdir::WalkDir;

pub use self::{daily::DailyFiles, hourly::HourlyRows};
use crate::{prelude::*, usage::UsageSample};

pub trait UsageSource {
    /// Read the hourly samples from a single CSV file, in file order.
    fn read_file(&self, path: &Path) -> Result<Vec<UsageSample>>;

    /// Read all CSV files under the directory, recursively and ordered by path.
    #[instrument(skip_all, fields(root = %root.display()))]
    fn read_directory(&self, root: &Path) -> Result<Vec<UsageSample>> {
        let paths = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_ok(|entry| entry.file_type().is_file())
            .map_ok(walkdir::DirEntry::into_path)
            .filter_ok(|path| path.extension().is_some_and(|extension| extension == "csv"))
            .collect::<Result<Vec<_>, walkdir::Error>>()
            .with_context(|| format!("failed to walk `{}`", root.display()))?;
        info!(n_files = paths.len(), "found CSV files");

        let mut samples = Vec::new();
        for path in paths {
            let file_samples = self
                .read_file(&path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            debug!(path = %path.display(), n_samples = file_samples.len(), "read");
            samples.extend(file_samples);
        }
        Ok(samples)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputFormat {
    /// `YYYY-MM-DD.csv` files with `H:MM,kWh` rows, labelled by the end of the hour.
    Daily,

    /// Files with `M/D/YYYY,H:MM,kWh` rows, labelled by the start of the hour.
    Hourly,
}

impl InputFormat {
    #[must_use]
    pub const fn source(self) -> &'static dyn UsageSource {
        match self {
            Self::Daily => &DailyFiles,
            Self::Hourly => &HourlyRows,
        }
    }
}

fn csv_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    Ok(csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?)
}

/// Parse the hour from an `H:MM` label.
fn parse_hour_label(label: &str) -> Result<u32> {
    let (hour, minute) =
        label.split_once(':').with_context(|| format!("`{label}` is not an `H:MM` time"))?;
    let minute: u32 = minute.parse().with_context(|| format!("invalid minutes in `{label}`"))?;
    ensure!(minute < 60, "invalid minutes in `{label}`");
    hour.parse().with_context(|| format!("invalid hour in `{label}`"))
}
