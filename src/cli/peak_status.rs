use chrono::Local;

use crate::{cli::PeakStatusArgs, forecast::next_change, prelude::*};

#[instrument(skip_all)]
pub fn peak_status(args: &PeakStatusArgs) -> Result {
    let now = args.at.unwrap_or_else(|| Local::now().naive_local());
    let change = next_change(now)?;
    let until_change = change.after.to_std().context("the change is in the past")?;
    info!(current_time = %now, "now");
    info!(is_peak = change.is_peak, "status");
    info!(
        at = %change.at,
        after = %humantime::format_duration(until_change),
        "time till next peak change",
    );
    Ok(())
}
