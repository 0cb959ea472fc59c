mod compare;
mod peak_status;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

pub use self::{compare::compare, peak_status::peak_status};
use crate::ingest::InputFormat;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: compare the block and the time-of-use plans on historical usage.
    #[clap(name = "compare")]
    Compare(CompareArgs),

    /// Tell whether it is on-peak right now, and for how long.
    #[clap(name = "peak-status")]
    PeakStatus(PeakStatusArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Directory to search for CSV exports, recursively.
    #[clap(env = "USAGE_DIRECTORY")]
    pub directory: PathBuf,

    /// The directory contains `Date,Time,Usage` exports instead of the daily `YYYY-MM-DD.csv` files.
    #[clap(long, env = "ALTERNATIVE_FORMAT")]
    pub alternative_format: bool,

    #[clap(long, value_enum, default_value = "json", env = "OUTPUT")]
    pub output: OutputFormat,
}

impl CompareArgs {
    pub const fn input_format(&self) -> InputFormat {
        if self.alternative_format { InputFormat::Hourly } else { InputFormat::Daily }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,

    /// Human-readable table.
    Table,
}

#[derive(Parser)]
pub struct PeakStatusArgs {
    /// Local time to check instead of now, for example: `2024-07-17T19:30:00`.
    #[clap(long)]
    pub at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() {
        let args = Args::try_parse_from(["rmp-tariffs", "compare", "usage", "--alternative-format"])
            .unwrap();
        let Command::Compare(args) = args.command else { panic!("expected `compare`") };
        assert_eq!(args.directory, PathBuf::from("usage"));
        assert_eq!(args.input_format(), InputFormat::Hourly);
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_parse_peak_status() {
        let args = Args::try_parse_from(["rmp-tariffs", "peak-status", "--at", "2024-07-17T19:30:00"])
            .unwrap();
        let Command::PeakStatus(args) = args.command else { panic!("expected `peak-status`") };
        assert_eq!(args.at.map(|at| at.to_string()).as_deref(), Some("2024-07-17 19:30:00"));
    }
}
