mod news;
mod price;
mod route;

use rialtick_core::AggregationService;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(service: &AggregationService, cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::Price => price::run(service, cli.user_id).await,
        Command::News => news::run(service, cli.user_id).await,
        Command::Route { text } => route::run(service, cli.user_id, text).await,
    }
}
