//! CEP-Race: a concurrent Brazilian postal code lookup client
//!
//! This is the main entry point for the application.

use anyhow::Result;
use cep_race::{
    config::{self, Cli},
    providers, HttpClient, LookupError, RaceOutcome, Racer,
};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    info!("Starting cep-race v{}", cep_race::VERSION);

    let cep = config::normalize_cep(&cli.cep)?;

    let client = HttpClient::new()?;
    let providers = providers::all();
    info!(
        "Racing {} providers with a {} ms deadline",
        providers.len(),
        cli.timeout_ms
    );

    let racer = Racer::new(client, providers)
        .with_timeout(Duration::from_millis(cli.timeout_ms));

    let outcome = racer.run(&cep).await;
    Ok(report(outcome))
}

/// Print the terminal outcome and map it to an exit code:
/// 0 success, 1 provider error, 2 timeout.
fn report(outcome: RaceOutcome) -> ExitCode {
    match outcome {
        RaceOutcome::Winner(address) => {
            println!("Fastest response:");
            println!("{}", address);
            ExitCode::SUCCESS
        }
        RaceOutcome::Failed(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
        RaceOutcome::TimedOut(deadline) => {
            eprintln!("Error: {}", LookupError::Timeout(deadline));
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
