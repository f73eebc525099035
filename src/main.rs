use std::process::ExitCode;

use clap::Parser;
use pdf_sizes::{
    EXIT_FATAL, EXIT_PARTIAL,
    app::{self, RunStatus},
    cli::Args,
    config::Config,
    logging,
};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pdf_sizes: {e}");
            return ExitCode::from(EXIT_FATAL);
        }
    };

    match app::run(&config) {
        Ok(RunStatus::Complete) => ExitCode::SUCCESS,
        Ok(RunStatus::Partial) => ExitCode::from(EXIT_PARTIAL),
        Err(e) => {
            eprintln!("pdf_sizes: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}
