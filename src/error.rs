use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for invocation mistakes (missing or unusable header path)
pub const EXIT_USAGE: i32 = 1;

/// Exit status when the header could not be persisted
pub const EXIT_IO: i32 = 2;

/// Main error type for hdrgen operations
#[derive(Error, Debug)]
pub enum HdrgenError {
    /// The header path has no final segment to derive a guard from
    #[error("Header name is empty: {path:?} has no file name to derive an include guard from")]
    EmptyHeaderName { path: String },

    /// Creating, writing or renaming the output failed
    #[error("Failed to write header {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error outside of the header write itself
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HdrgenError {
    /// Process exit status the CLI reports for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyHeaderName { .. } => EXIT_USAGE,
            Self::Write { .. } | Self::Io(_) | Self::Json(_) => EXIT_IO,
        }
    }
}

pub type Result<T> = std::result::Result<T, HdrgenError>;
