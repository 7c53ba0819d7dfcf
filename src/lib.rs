// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod testing;

// Re-export commonly used types
pub use crate::core::{
    ast::{FunctionDef, FunctionKind, PythonModule},
    AnalysisRecord, FunctionMetadata, TestCase,
};

pub use crate::analyzers::{analyze, analyze_path, parse_python, AnalyzeOptions, Analyzer};

pub use crate::config::{load_generation_config, GenerationConfig, GenerationSettings};

pub use crate::errors::{Error, Result};

pub use crate::testing::{is_public_function, TestGenerator};
