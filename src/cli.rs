//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::identifier::IDENTIFIER_LEN;

/// Top-level CLI parser for `psi-inputs`.
#[derive(Debug, Parser)]
#[command(
    name = "psi-inputs",
    version,
    about = "Write random identifiers, one per line, as input for a private set intersection run"
)]
pub struct Cli {
    /// File to write; created or truncated.
    pub output: PathBuf,

    /// Number of identifiers to write. Zero or a negative count leaves an empty file.
    #[arg(allow_negative_numbers = true)]
    pub count: i64,

    /// Seed the generator for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Characters per identifier.
    #[arg(long, default_value_t = IDENTIFIER_LEN)]
    pub length: usize,

    /// Logging verbosity.
    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Parser for the `check-inputs` binary.
#[derive(Debug, Parser)]
#[command(
    name = "check-inputs",
    version,
    about = "Check that a file holds one newline-terminated identifier per line"
)]
pub struct CheckCli {
    /// Identifier file to check.
    pub input: PathBuf,

    /// Expected characters per identifier.
    #[arg(long, default_value_t = IDENTIFIER_LEN)]
    pub length: usize,

    /// Logging verbosity.
    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Log verbosity flags shared by both binaries.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Verbosity {
    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Verbosity {
    /// Default filter directive for the tracing subscriber.
    #[must_use]
    pub fn level(self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckCli, Cli};
    use clap::Parser;

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::parse_from(["psi-inputs", "out.txt", "5"]);
        assert_eq!(cli.output.to_str(), Some("out.txt"));
        assert_eq!(cli.count, 5);
        assert_eq!(cli.length, 128);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.verbosity.level(), "warn");
    }

    #[test]
    fn accepts_negative_count() {
        let cli = Cli::parse_from(["psi-inputs", "out.txt", "-3"]);
        assert_eq!(cli.count, -3);
    }

    #[test]
    fn parses_seed_length_and_verbosity() {
        let args = ["psi-inputs", "out.txt", "2", "--seed", "17", "--length", "16", "-vv"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.seed, Some(17));
        assert_eq!(cli.length, 16);
        assert_eq!(cli.verbosity.level(), "debug");
    }

    #[test]
    fn quiet_lowers_level() {
        let cli = Cli::parse_from(["psi-inputs", "out.txt", "2", "-q"]);
        assert_eq!(cli.verbosity.level(), "error");
    }

    #[test]
    fn rejects_non_numeric_count() {
        assert!(Cli::try_parse_from(["psi-inputs", "out.txt", "five"]).is_err());
    }

    #[test]
    fn rejects_missing_count() {
        assert!(Cli::try_parse_from(["psi-inputs", "out.txt"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["psi-inputs", "out.txt", "1", "extra"]).is_err());
    }

    #[test]
    fn check_parses_input_path() {
        let cli = CheckCli::parse_from(["check-inputs", "in.txt", "--length", "8"]);
        assert_eq!(cli.input.to_str(), Some("in.txt"));
        assert_eq!(cli.length, 8);
    }
}
