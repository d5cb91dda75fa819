//! Filesystem port for file I/O operations.

use std::io::{self, Write};
use std::path::Path;

/// Provides filesystem access for writing and reading identifier files.
///
/// Abstracting the filesystem allows tests to inject failing writers
/// without touching the real disk.
pub trait FileSystem {
    /// Opens `path` for writing, creating it or truncating existing content.
    ///
    /// The returned writer owns the file handle; dropping it closes the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created (missing parent
    /// directory, permission denied, etc.).
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
