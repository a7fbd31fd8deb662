//! Command-line front end for the flow runtime backend.
//!
//! Loads the client configuration, initializes logging, performs one
//! backend call chosen by the subcommand and prints the result.
//!
//! ```text
//! flowstate start-session
//! flowstate upload 1 ./rows.csv
//! flowstate call-worker 1 data_description
//! flowstate get-state 1 data_description
//! flowstate metrics --labels
//! ```

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use flowstate_client::{ClientConfig, SessionStateClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, a propagated backend call
/// fails, or stdout cannot be written.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config = ClientConfig::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }

    // Initialize structured logging on stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!(base_url = config.base_url, "configuration loaded");

    let client = SessionStateClient::new(&config)?;
    let output = commands::execute(&client, args.command).await?;

    let produced = commands::render(&output, &mut std::io::stdout().lock())?;
    Ok(if produced {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
