//! `check-inputs`: validate an identifier file.

use tracing::info;

use crate::cli::CheckCli;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::identifier::ALPHABET;
use crate::reader::{check_identifiers, read_identifiers};

/// Reads and validates the input file, returning the identifier count.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::Malformed`] for the first bad line.
pub fn run_with_context(ctx: &ServiceContext, cli: &CheckCli) -> Result<usize, Error> {
    let lines = read_identifiers(ctx.fs.as_ref(), &cli.input)?;
    let count = check_identifiers(&cli.input, &lines, ALPHABET, cli.length)?;
    info!(path = %cli.input.display(), count, "identifiers ok");
    Ok(count)
}
