//! Command-line definitions for the `analyzer` and `test-generator` binaries.
//!
//! The positional path is optional at the clap level so that a missing
//! argument prints the short usage line and exits with status 1.

pub mod setup;

use crate::errors::Error;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

pub const ANALYZER_USAGE: &str = "Usage: analyzer <file_or_directory>";
pub const TEST_GENERATOR_USAGE: &str = "Usage: test-generator <source_file>";

#[derive(Parser, Debug)]
#[command(name = "analyzer")]
#[command(about = "Report placeholder code metrics for Python sources", long_about = None)]
#[command(version)]
pub struct AnalyzerCli {
    /// File or directory to analyze
    pub path: Option<PathBuf>,

    /// File-name glob used when walking a directory
    #[arg(long, default_value = crate::io::DEFAULT_SOURCE_PATTERN)]
    pub pattern: String,

    /// Fail when the target is neither a file nor a directory
    #[arg(long)]
    pub strict: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitFormat {
    /// Generated pytest source
    Tests,
    /// Extracted function metadata as JSON
    Metadata,
}

#[derive(Parser, Debug)]
#[command(name = "test-generator")]
#[command(about = "Generate pytest scaffolding from a Python source file", long_about = None)]
#[command(version)]
pub struct TestGeneratorCli {
    /// Python source file to generate tests for
    pub source_file: Option<PathBuf>,

    /// TOML settings file with a [generation] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to emit
    #[arg(long, value_enum, default_value = "tests")]
    pub emit: EmitFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Exit status for an error that reached `main`
pub fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map_or(2, Error::exit_code)
}

/// Print an error that reached `main` and map it to a process exit code.
///
/// A missing argument prints only the usage line on stdout; everything else
/// goes to stderr.
pub fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<Error>() {
        Some(Error::MissingArgument { usage }) => println!("{}", usage),
        _ => eprintln!("Error: {:#}", err),
    }
    ExitCode::from(exit_status(err))
}
