//! Error type shared by the generator and the input checker.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures that end a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Command-line arguments were missing or unparseable.
    #[error(transparent)]
    Args(#[from] clap::Error),

    /// An argument parsed but holds an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The file could not be opened, written or read.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted (`create`, `write`, `read`).
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An input file contains a line that is not a well-formed identifier.
    #[error("{}:{line}: {reason}", .path.display())]
    Malformed {
        /// The file being checked.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io { action, path: path.to_path_buf(), source }
    }
}
