//! Reads identifier files back the way a PSI party loads its inputs.

use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::identifier::identifier_defect;
use crate::ports::FileSystem;

/// Loads `path` and returns its lines in file order.
///
/// Lines are split on `\n` only; a `\r` stays part of its line. A non-empty
/// file must end with `\n`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Malformed`]
/// if the last line is not newline-terminated.
pub fn read_identifiers(fs: &dyn FileSystem, path: &Path) -> Result<Vec<String>, Error> {
    let content = fs.read_to_string(path).map_err(|source| Error::io("read", path, source))?;
    let lines: Vec<String> = content.split_terminator('\n').map(str::to_owned).collect();
    if !content.is_empty() && !content.ends_with('\n') {
        return Err(Error::Malformed {
            path: path.to_path_buf(),
            line: lines.len(),
            reason: "missing final newline".into(),
        });
    }
    debug!(path = %path.display(), lines = lines.len(), "read identifiers");
    Ok(lines)
}

/// Checks every line is an identifier of `len` symbols from `alphabet` and
/// returns how many there are. Duplicates are allowed.
///
/// # Errors
///
/// Returns [`Error::Malformed`] for the first offending line (1-based).
pub fn check_identifiers(
    path: &Path,
    lines: &[String],
    alphabet: &[u8],
    len: usize,
) -> Result<usize, Error> {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(reason) = identifier_defect(line, alphabet, len) {
            return Err(Error::Malformed { path: path.to_path_buf(), line: idx + 1, reason });
        }
    }
    Ok(lines.len())
}
