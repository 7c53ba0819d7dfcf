use crate::analyzers::parse_python;
use crate::config::GenerationConfig;
use crate::core::ast::{FunctionDef, PythonModule};
use crate::core::{FunctionMetadata, TestCase};
use crate::errors::Result;
use crate::io::read_file;
use std::path::Path;

/// Category of stub test emitted for a function, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Basic,
    EdgeCases,
    ErrorHandling,
}

impl TestKind {
    fn suffix(self) -> &'static str {
        match self {
            TestKind::Basic => "basic",
            TestKind::EdgeCases => "edge_cases",
            TestKind::ErrorHandling => "error_handling",
        }
    }

    fn description(self) -> &'static str {
        match self {
            TestKind::Basic => "Basic functionality test",
            TestKind::EdgeCases => "Edge case handling",
            TestKind::ErrorHandling => "Error handling test",
        }
    }

    fn enabled(self, config: &GenerationConfig) -> bool {
        match self {
            TestKind::Basic => true,
            TestKind::EdgeCases => config.include_edge_cases(),
            TestKind::ErrorHandling => config.include_error_cases(),
        }
    }
}

const TEST_KINDS: [TestKind; 3] = [TestKind::Basic, TestKind::EdgeCases, TestKind::ErrorHandling];

/// Deterministic test name: `test_<function>_<suffix>`
pub fn test_name(function_name: &str, kind: TestKind) -> String {
    format!("test_{}_{}", function_name, kind.suffix())
}

/// Functions whose name starts with an underscore are private and get no tests
pub fn is_public_function(name: &str) -> bool {
    !name.starts_with('_')
}

/// Generates pytest scaffolding for the functions of one source file
pub struct TestGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> TestGenerator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    pub fn analyze_function(&self, def: &FunctionDef) -> FunctionMetadata {
        FunctionMetadata {
            name: def.name.clone(),
            args: def.params.clone(),
            line_number: def.line,
            test_cases: self.generate_test_cases(&def.name),
        }
    }

    pub fn generate_test_cases(&self, function_name: &str) -> Vec<TestCase> {
        TEST_KINDS
            .iter()
            .filter(|kind| kind.enabled(self.config))
            .map(|&kind| TestCase::new(test_name(function_name, kind), kind.description()))
            .collect()
    }

    /// Metadata for every public, non-async function in discovery order
    pub fn module_metadata(&self, module: &PythonModule) -> Vec<FunctionMetadata> {
        module
            .sync_functions()
            .filter(|def| is_public_function(&def.name))
            .map(|def| self.analyze_function(def))
            .collect()
    }

    pub fn collect_metadata(&self, source_path: &Path) -> Result<Vec<FunctionMetadata>> {
        let source = read_file(source_path)?;
        let module = parse_python(&source, source_path)?;
        Ok(self.module_metadata(&module))
    }

    /// Read, parse and render the test document for `source_path`.
    ///
    /// Read and parse failures abort before anything is rendered.
    pub fn generate_test_file(&self, source_path: &Path) -> Result<String> {
        let metadata = self.collect_metadata(source_path)?;
        log::debug!(
            "Generating tests for {} functions in {}",
            metadata.len(),
            source_path.display()
        );
        Ok(render_test_file(&file_label(source_path), &metadata))
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render_test_file(file_name: &str, functions: &[FunctionMetadata]) -> String {
    let mut out = format!("\"\"\"Tests for {}\"\"\"\n\n", file_name);
    out.push_str("import pytest\n\n");

    for case in functions.iter().flat_map(|f| &f.test_cases) {
        out.push_str(&format!("def {}():\n", case.name));
        out.push_str(&format!("    \"\"\"{}\"\"\"\n", case.description));
        out.push_str("    # TODO: Implement test\n");
        out.push_str("    pass\n\n");
    }

    out
}
