//! Chiton CLI - lowest-risk path through a chiton risk map

mod cli;
mod config;
mod error;
mod executor;
mod output;
mod report;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let formatter = OutputFormatter::new(config.quiet);
    let results = Executor::new(&config).execute()?;

    for result in &results {
        formatter.print_result(result);
    }
    formatter.print_summary(&results);

    if let Some(path) = &config.output {
        report::write(path, &results)?;
        if !config.quiet {
            println!("Report written to {}", path.display());
        }
    }

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failures => Err(CliError::RunsFailed(failures)),
    }
}
