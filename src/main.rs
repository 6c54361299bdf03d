//! nifti_to_dscalar CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the batch, and exit with
//! a failing status on configuration errors or failed projections.
//! For programmatic use, prefer the library API (`nifti_to_dscalar::api`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse_normalized();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
