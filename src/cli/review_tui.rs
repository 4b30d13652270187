//! TUI mode for reviewing one drink.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lets users comment on and rate a drink.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use drink_reviews::tui::{DrinkReviewApp, ReviewContext, set_review_context};
use drink_reviews::{DrinkReviewsConfig, ReviewError};

use super::{build_gateway, telemetry_sink};

/// Runs the TUI mode for reviewing one drink.
///
/// # Errors
///
/// Returns an error if:
/// - The drink identifier is missing or blank
/// - The API base URL is invalid
/// - The TUI fails to initialise
///
/// Request failures inside the TUI are shown in the view, not returned.
pub async fn run(config: &DrinkReviewsConfig) -> Result<(), ReviewError> {
    let drink_id = config.require_drink_id()?;
    let gateway = build_gateway(config)?;

    let context = ReviewContext::new(drink_id, Arc::new(gateway))
        .with_telemetry(telemetry_sink(config));

    // Store the context for Model::init() to retrieve. If already set, this
    // is a no-op and the existing context remains.
    let _ = set_review_context(context);

    run_tui().await.map_err(|error| ReviewError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `DrinkReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // DrinkReviewApp::init() retrieves the context from module-level storage.
    let program = Program::<DrinkReviewApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
