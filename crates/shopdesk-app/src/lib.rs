pub mod application;
pub mod presentation;

use clap::Parser;
use std::process::ExitCode;

use shopdesk_infrastructure::config::{AppConfig, API_URL_ENV};
use shopdesk_infrastructure::logging;

use presentation::cli::Cli;
use presentation::error::CommandError;
use presentation::state::AppState;

/// Entry point of the `shopdesk` binary.
///
/// Command output is one JSON document on stdout. Failures print a
/// [`CommandError`] the same way and exit with status 1.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli).await {
        Ok(value) => {
            print_json(&value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(code = err.code, message = %err.message, "Command failed");
            print_json(&serde_json::json!({ "error": err }));
            ExitCode::FAILURE
        }
    }
}

async fn run_command(cli: Cli) -> Result<serde_json::Value, CommandError> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = AppConfig::load_from(path)?;
            config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
            config
        }
        None => AppConfig::load()?,
    };
    config.apply_api_url_override(cli.api_url.clone());

    if let Err(e) = logging::init_logger(config.log_dir(), cli.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let state = AppState::new(config)?;
    presentation::commands::execute(cli.command, &state).await
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}
