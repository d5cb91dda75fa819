//! Core library for `psi-inputs`: random identifier files used as sample
//! input for private set intersection runs.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod ports;
pub mod reader;
pub mod writer;

pub use error::Error;

use clap::Parser;

use crate::context::ServiceContext;
use crate::writer::WriteSummary;

/// Run the generator with the provided arguments.
///
/// # Errors
///
/// Returns [`Error::Args`] when argument parsing fails, or the failure from
/// writing the output file.
pub fn run<I, T>(args: I) -> Result<WriteSummary, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    logging::init(cli.verbosity.level());
    commands::generate::run(&cli)
}

/// Run the input checker with the provided arguments.
///
/// # Errors
///
/// Returns [`Error::Args`] when argument parsing fails, or the failure from
/// reading or validating the input file.
pub fn run_check<I, T>(args: I) -> Result<usize, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::CheckCli::try_parse_from(args)?;
    logging::init(cli.verbosity.level());
    commands::check::run_with_context(&ServiceContext::live(), &cli)
}
