//! `psi-inputs`: generate an identifier file.

use tracing::info;

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::identifier::ALPHABET;
use crate::writer::{write_identifiers, WriteSummary};

/// Runs the generator for parsed arguments.
///
/// # Errors
///
/// Propagates any failure from [`write_identifiers`].
pub fn run(cli: &Cli) -> Result<WriteSummary, Error> {
    if let Some(seed) = cli.seed {
        info!(seed, "using seeded generator");
    }
    let mut ctx = ServiceContext::for_seed(cli.seed);
    run_with_context(&mut ctx, cli)
}

/// Runs the generator against the given service context.
///
/// # Errors
///
/// Propagates any failure from [`write_identifiers`].
pub fn run_with_context(ctx: &mut ServiceContext, cli: &Cli) -> Result<WriteSummary, Error> {
    write_identifiers(ctx, &cli.output, cli.count, cli.length, ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn seeded_run_writes_requested_lines() {
        let path = std::env::temp_dir().join("psi_inputs_generate_cmd.txt");
        let output = path.to_str().unwrap();
        let cli = Cli::parse_from(["psi-inputs", output, "3", "--seed", "4", "--length", "10"]);
        let summary = run(&cli).unwrap();
        assert_eq!(summary.lines, 3);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().all(|l| l.len() == 10));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn zero_length_flag_is_invalid() {
        let path = std::env::temp_dir().join("psi_inputs_generate_zero_len.txt");
        let cli = Cli::parse_from(["psi-inputs", path.to_str().unwrap(), "1", "--length", "0"]);
        assert!(matches!(run(&cli), Err(Error::InvalidArgument(_))));
    }
}
