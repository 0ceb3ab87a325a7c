//! Pageframe CLI entry point.

use clap::Parser;
use pageframe::cli;
use pageframe::config::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = pageframe::logging::init(args.verbose) {
        eprintln!("pageframe: cannot initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
