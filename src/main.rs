//! Drink reviews CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use drink_reviews::{DrinkReviewsConfig, OperationMode, ReviewError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Summary => cli::summary::run(&config).await,
        OperationMode::ReviewTui => cli::review_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<DrinkReviewsConfig, ReviewError> {
    DrinkReviewsConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}
