// src/main.rs
use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use product_grouper::{
    app,
    args::{Args, USAGE},
    config::RunConfig,
    logging,
};
use product_grouper_shared_kernel::PresentationError;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("{}", PresentationError::Usage { usage: USAGE.to_string() });
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("[warn] {e:#}");
    }

    let config = match RunConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(output) => {
            println!("Grouped results written to {}", output.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
