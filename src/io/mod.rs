pub mod walker;

pub use walker::{find_source_files, FileWalker, DEFAULT_SOURCE_PATTERN};

use crate::errors::{Error, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Lexical path cleanup: drops `.` components and redundant separators.
///
/// `..` is kept and symlinks are not resolved. An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::file_system(format!("Failed to read {}", path.display()), path, e))
}

/// Confirm a file can be opened for reading. The handle is dropped on return.
pub fn check_readable(path: &Path) -> std::io::Result<()> {
    fs::File::open(path).map(drop)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::file_system(format!("Failed to write {}", path.display()), path, e))
}

/// Write `content` plus a trailing newline to `output`, or to stdout when no
/// output file is given.
pub fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => write_file(path, &format!("{}\n", content)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
