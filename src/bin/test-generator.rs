use anyhow::{Context, Result};
use clap::Parser;
use overture_skills::cli::setup::init_logging;
use overture_skills::cli::{report_error, EmitFormat, TestGeneratorCli, TEST_GENERATOR_USAGE};
use overture_skills::config::load_generation_config;
use overture_skills::errors::Error;
use overture_skills::io::emit;
use overture_skills::testing::TestGenerator;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = TestGeneratorCli::parse();
    init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(cli: TestGeneratorCli) -> Result<()> {
    let source_path = cli
        .source_file
        .ok_or_else(|| Error::missing_argument(TEST_GENERATOR_USAGE))?;

    let config = load_generation_config(cli.config.as_deref())?;
    let generator = TestGenerator::new(&config);

    let content = match cli.emit {
        EmitFormat::Tests => generator.generate_test_file(&source_path)?,
        EmitFormat::Metadata => {
            let metadata = generator.collect_metadata(&source_path)?;
            serde_json::to_string_pretty(&metadata)?
        }
    };

    emit(cli.output.as_deref(), &content).context("Failed to write generated tests")?;
    Ok(())
}
