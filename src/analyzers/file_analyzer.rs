use crate::analyzers::Analyzer;
use crate::core::AnalysisRecord;
use crate::io::check_readable;
use std::path::Path;

/// Analyzer that reports fixed zero metrics for every file.
///
/// The file is opened once to confirm it is readable; a failure is recorded
/// as an issue on the record instead of aborting the batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderAnalyzer;

impl PlaceholderAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for PlaceholderAnalyzer {
    fn analyze_file(&self, path: &Path) -> AnalysisRecord {
        let record = AnalysisRecord::new(path);
        match check_readable(path) {
            Ok(()) => record,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                record.with_issue(format!("failed to read file: {}", e))
            }
        }
    }
}
