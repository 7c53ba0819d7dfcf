//! Pytest scaffolding generation.
//!
//! Each public function of a source file gets a `basic` stub test, plus
//! optional `edge_cases` and `error_handling` stubs depending on the
//! [`GenerationConfig`](crate::config::GenerationConfig).

pub mod generator;

pub use generator::{is_public_function, render_test_file, test_name, TestGenerator, TestKind};
