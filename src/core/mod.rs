pub mod ast;

use crate::io::normalize_path;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder code metrics for one analyzed file.
///
/// Field order matches the JSON emitted by the analyzer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub file: String,
    pub lines_of_code: u64,
    pub cyclomatic_complexity: u32,
    pub issues: Vec<String>,
}

impl AnalysisRecord {
    pub fn new(path: &Path) -> Self {
        Self {
            file: normalize_path(path).display().to_string(),
            lines_of_code: 0,
            cyclomatic_complexity: 0,
            issues: Vec::new(),
        }
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issues.push(issue.into());
        self
    }
}

/// A named stub test to be rendered into the generated document
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub description: String,
}

impl TestCase {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Extracted shape of one function definition, driving test-case generation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionMetadata {
    pub name: String,
    pub args: Vec<String>,
    pub line_number: usize,
    pub test_cases: Vec<TestCase>,
}
