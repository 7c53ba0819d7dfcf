//! Shared error types for the skill tools

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analyzer and test-generator operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required positional argument was not supplied
    #[error("{usage}")]
    MissingArgument { usage: String },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Analysis target is neither a file nor a directory
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Parsing errors
    #[error("Parse error in {}:{line}:{column}: {message}", .file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create a missing argument error carrying the usage line
    pub fn missing_argument(usage: impl Into<String>) -> Self {
        Self::MissingArgument {
            usage: usage.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a parse error with location
    pub fn parse(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Process exit code for this error when it reaches a binary's `main`
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArgument { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
