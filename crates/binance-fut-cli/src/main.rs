/*
[INPUT]:  Command line arguments and environment variables
[OUTPUT]: Process exit code reflecting the order outcome
[POS]:    Binary entry point
[UPDATE]: When startup or exit code handling changes
*/

use std::process::ExitCode;

use clap::Parser;

use binance_fut_cli::{init_tracing, run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // Keep the guard alive so buffered file records flush on exit
    let _guard = match init_tracing(&args) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to initialise logging: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
