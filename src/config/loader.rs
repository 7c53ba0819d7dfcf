use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::GenerationConfig;
use crate::errors::{Error, Result};

/// Read a settings document into memory
pub fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML settings document
pub fn parse_generation_config(contents: &str) -> Result<GenerationConfig> {
    toml::from_str::<GenerationConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse settings: {}", e)))
}

/// Load settings from `path`, or the defaults when no path is given.
///
/// An explicit path that cannot be read or parsed is an error rather than a
/// silent fallback.
pub fn load_generation_config(path: Option<&Path>) -> Result<GenerationConfig> {
    let Some(path) = path else {
        log::debug!("No settings file given, using default generation config");
        return Ok(GenerationConfig::default());
    };

    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!(
            "Failed to read settings file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_generation_config(&contents)?;
    log::debug!("Loaded generation config from {}", path.display());
    Ok(config)
}
