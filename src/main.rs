//! marmot-batch CLI entrypoint.
//!
//! Parse args, run the batch, and exit with the status of the first failure.
//! For programmatic use, prefer the library API (`marmot_batch::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
