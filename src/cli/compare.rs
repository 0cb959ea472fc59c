use crate::{
    cli::{CompareArgs, OutputFormat},
    prelude::*,
    summary::summarize,
    tables::build_report_table,
};

#[instrument(skip_all)]
pub fn compare(args: &CompareArgs) -> Result {
    ensure!(args.directory.is_dir(), "`{}` is not a directory", args.directory.display());

    let samples = args.input_format().source().read_directory(&args.directory)?;
    info!(n_samples = samples.len(), "read usage samples");

    let report = summarize(samples);
    for error in &report.errors {
        error!("{error}");
    }
    info!(
        n_months = report.months.len(),
        difference = %report.overall.difference,
        "compared the plans",
    );

    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Table => println!("{}", build_report_table(&report)),
    }
    Ok(())
}
