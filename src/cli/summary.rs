//! Summary mode: load one drink and print it without starting the TUI.

use std::io::{self, Write};
use std::time::Instant;

use drink_reviews::telemetry::TelemetryEvent;
use drink_reviews::{DrinkBundle, DrinkReviewGateway, DrinkReviewsConfig, ReviewError};

use super::{build_gateway, telemetry_sink};

/// Loads the configured drink and writes its summary to stdout.
///
/// # Errors
///
/// Returns an error if the drink identifier is missing, the gateway cannot
/// be built, the API call fails, or stdout cannot be written.
pub async fn run(config: &DrinkReviewsConfig) -> Result<(), ReviewError> {
    let drink_id = config.require_drink_id()?;
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);

    let started = Instant::now();
    let result = gateway.drink_bundle(&drink_id).await;
    telemetry.record(TelemetryEvent::RequestCompleted {
        operation: "load_drink".to_owned(),
        latency_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        success: result.is_ok(),
    });

    write_summary(&result?)
}

fn write_summary(bundle: &DrinkBundle) -> Result<(), ReviewError> {
    let mut stdout = io::stdout().lock();
    let message = format_summary(bundle);

    writeln!(stdout, "{message}").map_err(|error| ReviewError::Io {
        message: error.to_string(),
    })
}

fn format_summary(bundle: &DrinkBundle) -> String {
    let drink = &bundle.drink;
    let name = drink.name.as_deref().unwrap_or("unnamed drink");
    let category = drink.category.as_deref().unwrap_or("uncategorised");
    let glass = drink.glass.as_deref().unwrap_or("no glass listed");
    let ingredients = if drink.ingredients.is_empty() {
        "none listed".to_owned()
    } else {
        drink.ingredients.join(", ")
    };

    format!(
        "{name} ({category}, {glass})\nIngredients: {ingredients}\nAverage Rating: {}\nComments: {}",
        bundle.average_rating,
        bundle.comments.len()
    )
}
