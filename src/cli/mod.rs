//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`review_tui`]: Interactive TUI for reviewing one drink
//! - [`summary`]: Print a plain-text summary of one drink and exit

use std::sync::Arc;

use drink_reviews::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use drink_reviews::{DrinkReviewsConfig, HttpDrinkReviewGateway, ReviewError};

pub mod review_tui;
pub mod summary;

/// Builds the HTTP gateway from configuration.
///
/// # Errors
///
/// Returns [`ReviewError::InvalidUrl`] for an unusable base URL and
/// [`ReviewError::Configuration`] when the HTTP client cannot be built.
pub fn build_gateway(config: &DrinkReviewsConfig) -> Result<HttpDrinkReviewGateway, ReviewError> {
    HttpDrinkReviewGateway::new(config.api_base_url()?, config.request_timeout())
}

/// Selects the telemetry sink requested by `--telemetry`.
#[must_use]
pub fn telemetry_sink(config: &DrinkReviewsConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
