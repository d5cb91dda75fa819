//! Binary entrypoint for the `psi-inputs` CLI.

use std::process::ExitCode;

use psi_inputs::Error;

fn main() -> ExitCode {
    match psi_inputs::run(std::env::args_os()) {
        Ok(_) => ExitCode::SUCCESS,
        // clap prints usage and exits 2, or 0 for --help/--version.
        Err(Error::Args(err)) => err.exit(),
        Err(err) => {
            eprintln!("psi-inputs: {err}");
            ExitCode::FAILURE
        }
    }
}
