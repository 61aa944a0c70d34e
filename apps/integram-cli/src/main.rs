//! # Integram CLI
//!
//! Command-line client for the Integram social network.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod render;
mod state;
mod telemetry;

use cli::Cli;
use config::ClientConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = ClientConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let state = AppState::new(&config).await?;
    commands::run(cli.command, &state, cli.json).await
}
