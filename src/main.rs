use clap::Parser;
use std::process::ExitCode;

use tokio::io::BufReader;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

use config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("viewtxo=info,reqwest=warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    info!("ViewTXO init");

    let client = config.client();
    debug!("API base URL: {}", client.base_url());
    let (sink, display) = commands::display::spawn(config.pretty);

    let result = if config.is_interactive() {
        let stdin = BufReader::new(tokio::io::stdin());
        commands::run_interactive(&client, stdin, sink).await
    } else {
        commands::run_one_shot(&client, &config.txids, sink).await
    };

    if let Err(e) = result {
        error!("Input error: {}", e);
    }

    let failures = match display.await {
        Ok(failures) => failures,
        Err(e) => {
            error!("Display task failed: {}", e);
            1
        }
    };

    ExitCode::from(commands::exit_status(config.is_interactive(), failures))
}
