mod cli;
mod commands;
mod error;
mod oracle;
mod progress;
mod render;

use std::sync::Arc;

use clap::Parser;
use rialtick_core::{AggregationConfig, AggregationService, ReqwestHttpClient};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;
use crate::oracle::TerminalOracle;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let service = AggregationService::new(
        AggregationConfig::persian_market(),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(TerminalOracle),
    );

    let message = commands::run(&service, &cli).await?;
    println!("{message}");
    Ok(())
}
