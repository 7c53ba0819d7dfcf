//! Test-generation settings.
//!
//! The settings document has a single `[generation]` table with two boolean
//! toggles. Both default to `true`.

mod loader;

pub use loader::{load_generation_config, parse_generation_config, read_config_file};

use serde::{Deserialize, Serialize};

/// Root configuration for the test generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    #[serde(default)]
    pub generation: GenerationSettings,
}

/// Which categories of test stubs are emitted per function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSettings {
    #[serde(default = "default_true")]
    pub include_edge_cases: bool,
    #[serde(default = "default_true")]
    pub include_error_cases: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            include_edge_cases: true,
            include_error_cases: true,
        }
    }
}

impl GenerationConfig {
    pub fn new(include_edge_cases: bool, include_error_cases: bool) -> Self {
        Self {
            generation: GenerationSettings {
                include_edge_cases,
                include_error_cases,
            },
        }
    }

    pub fn include_edge_cases(&self) -> bool {
        self.generation.include_edge_cases
    }

    pub fn include_error_cases(&self) -> bool {
        self.generation.include_error_cases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_both_categories() {
        let config = GenerationConfig::default();
        assert!(config.include_edge_cases());
        assert!(config.include_error_cases());
    }

    #[test]
    fn test_new_sets_flags() {
        let config = GenerationConfig::new(false, true);
        assert!(!config.include_edge_cases());
        assert!(config.include_error_cases());
    }
}
