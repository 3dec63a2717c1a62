//! ffs CLI binary.
//!
//! Thin entry point: parse arguments, initialize logging, dispatch to the
//! library's CLI route.

use clap::Parser;
use ffs::cli::{run, Cli};
use ffs::logging::init_logging;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
