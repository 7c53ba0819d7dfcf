use crate::core::AnalysisRecord;
use crate::errors::{Error, Result};
use crate::io::{dir_exists, file_exists, find_source_files, DEFAULT_SOURCE_PATTERN};
use std::path::Path;

pub mod file_analyzer;
pub mod python;

pub use file_analyzer::PlaceholderAnalyzer;
pub use python::parse_python;

pub trait Analyzer {
    fn analyze_file(&self, path: &Path) -> AnalysisRecord;
}

/// Options for [`analyze_path`]
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// File-name glob selecting source files during directory traversal
    pub pattern: String,
    /// Treat a target that is neither a file nor a directory as an error
    pub strict: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_SOURCE_PATTERN.to_string(),
            strict: false,
        }
    }
}

/// Analyze a single file or every matching file under a directory.
///
/// A nonexistent target yields an empty result unless `options.strict` is
/// set, in which case it is [`Error::NotFound`].
pub fn analyze_path(
    path: &Path,
    options: &AnalyzeOptions,
    analyzer: &dyn Analyzer,
) -> Result<Vec<AnalysisRecord>> {
    if file_exists(path) {
        return Ok(vec![analyzer.analyze_file(path)]);
    }

    if dir_exists(path) {
        let files = find_source_files(path, &options.pattern)?;
        log::info!("Analyzing {} files under {}", files.len(), path.display());
        return Ok(files.iter().map(|file| analyzer.analyze_file(file)).collect());
    }

    if options.strict {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    log::warn!(
        "{} is neither a file nor a directory; nothing to analyze",
        path.display()
    );
    Ok(Vec::new())
}

/// Analyze `path` with the placeholder analyzer and default options
pub fn analyze(path: &Path) -> Result<Vec<AnalysisRecord>> {
    analyze_path(path, &AnalyzeOptions::default(), &PlaceholderAnalyzer)
}

/// Render records as a JSON array indented by two spaces
pub fn to_json(records: &[AnalysisRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
