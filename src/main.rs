mod cli;
mod forecast;
mod ingest;
mod prelude;
mod quantity;
mod summary;
mod tables;
mod tariff;
mod usage;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, compare, peak_status},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    debug!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => compare(&args)?,
        Command::PeakStatus(args) => peak_status(&args)?,
    }

    Ok(())
}
