use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use nations::api::NationsClient;
use nations::cli::{run_command, Cli, CommandOutput};
use nations::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli).await {
        Ok(output) => {
            println!("{}", output.rendered);
            if output.error.is_some() {
                1
            } else {
                0
            }
        }
        Err(error) => {
            eprintln!("error: {:#}", error);
            1
        }
    };
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<CommandOutput> {
    let config = cli.load_config().context("Failed to load configuration")?;
    init_tracing(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let client = NationsClient::new(&config.api).context("Failed to build HTTP client")?;
    run_command(&cli.command, &config.pagination, Arc::new(client), cli.json).await
}
