//! Checks an identifier file before handing it to a PSI party.
//!
//! Usage: `check-inputs <input> [--length <n>]`

use std::process::ExitCode;

use psi_inputs::Error;

fn main() -> ExitCode {
    match psi_inputs::run_check(std::env::args_os()) {
        Ok(count) => {
            println!("{count} identifiers ok");
            ExitCode::SUCCESS
        }
        Err(Error::Args(err)) => err.exit(),
        Err(err) => {
            eprintln!("check-inputs: {err}");
            ExitCode::FAILURE
        }
    }
}
