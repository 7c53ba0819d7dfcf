//! Typed syntax model for Python sources.
//!
//! Only the fields the test generator consumes are kept: the function name,
//! its positional parameters, the declaration line and whether it is a plain
//! or `async` definition.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    /// `def name(...)`
    Def,
    /// `async def name(...)`
    AsyncDef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    /// Positional-or-keyword parameter names, in declaration order
    pub params: Vec<String>,
    /// 1-based line of the `def` (or `async`) keyword
    pub line: usize,
    pub kind: FunctionKind,
}

impl FunctionDef {
    pub fn is_async(&self) -> bool {
        self.kind == FunctionKind::AsyncDef
    }
}

/// Parsed Python source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonModule {
    pub path: PathBuf,
    /// Every function definition at any depth, in breadth-first discovery order
    pub functions: Vec<FunctionDef>,
}

impl PythonModule {
    /// Plain `def` functions, skipping `async def`
    pub fn sync_functions(&self) -> impl Iterator<Item = &FunctionDef> {
        self.functions.iter().filter(|f| !f.is_async())
    }
}
