use crate::errors::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default source-file name pattern
pub const DEFAULT_SOURCE_PATTERN: &str = "*.py";

/// Recursive discovery of source files under a root directory.
///
/// Files are yielded in the order the filesystem enumerates them. Hidden
/// entries are included and ignore files are not consulted.
pub struct FileWalker {
    root: PathBuf,
    pattern: Pattern,
}

impl FileWalker {
    pub fn new(root: PathBuf, pattern: &str) -> Result<Self> {
        Ok(Self {
            root,
            pattern: Pattern::new(pattern)?,
        })
    }

    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files
    }

    fn should_process(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.pattern.matches(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

pub fn find_source_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    Ok(FileWalker::new(root.to_path_buf(), pattern)?.walk())
}
