//! Streams generated identifiers to a newline-delimited file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::error::Error;

/// Outcome of a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// File that was written.
    pub path: PathBuf,
    /// Number of identifier lines written.
    pub lines: u64,
}

/// Writes `count` identifiers of `len` symbols from `alphabet` to `path`,
/// one per line, truncating any previous content.
///
/// A `count` of zero or below leaves an empty file. Identifiers are written
/// as they are generated; duplicates are not filtered. If writing fails
/// partway the file may hold fewer lines and the error is returned.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an empty alphabet or zero length,
/// and [`Error::Io`] if the file cannot be created, written or flushed.
pub fn write_identifiers(
    ctx: &mut ServiceContext,
    path: &Path,
    count: i64,
    len: usize,
    alphabet: &[u8],
) -> Result<WriteSummary, Error> {
    if alphabet.is_empty() {
        return Err(Error::InvalidArgument("alphabet must not be empty".into()));
    }
    if len == 0 {
        return Err(Error::InvalidArgument("identifier length must be at least 1".into()));
    }
    if count < 0 {
        warn!(count, "negative count, output will be empty");
    }
    let lines = u64::try_from(count).unwrap_or(0);

    let mut out = ctx.fs.create(path).map_err(|source| Error::io("create", path, source))?;
    debug!(path = %path.display(), lines, len, "opened output");

    for _ in 0..lines {
        let id = ctx.id_gen.generate_id(alphabet, len);
        writeln!(out, "{id}").map_err(|source| Error::io("write", path, source))?;
    }
    out.flush().map_err(|source| Error::io("write", path, source))?;

    info!(path = %path.display(), lines, "wrote identifiers");
    Ok(WriteSummary { path: path.to_path_buf(), lines })
}
