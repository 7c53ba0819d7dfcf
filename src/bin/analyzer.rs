use anyhow::{Context, Result};
use clap::Parser;
use overture_skills::analyzers::{analyze_path, to_json, AnalyzeOptions, PlaceholderAnalyzer};
use overture_skills::cli::setup::init_logging;
use overture_skills::cli::{report_error, AnalyzerCli, ANALYZER_USAGE};
use overture_skills::errors::Error;
use overture_skills::io::emit;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = AnalyzerCli::parse();
    init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(cli: AnalyzerCli) -> Result<()> {
    let path = cli
        .path
        .ok_or_else(|| Error::missing_argument(ANALYZER_USAGE))?;

    let options = AnalyzeOptions {
        pattern: cli.pattern,
        strict: cli.strict,
    };
    let records = analyze_path(&path, &options, &PlaceholderAnalyzer::new())?;
    let json = to_json(&records)?;

    emit(cli.output.as_deref(), &json).context("Failed to write analysis results")?;
    Ok(())
}
