//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.drink-reviews.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `DRINK_REVIEWS_DRINK_ID`,
//!    `DRINK_REVIEWS_API_BASE_URL`, …
//! 4. **Command-line arguments** – `--drink-id`/`-d`, `--api-base-url`/`-a`, …
//!
//! # Configuration File
//!
//! ```toml
//! drink_id = "11007"
//! api_base_url = "http://localhost:3000"
//! request_timeout_seconds = 10
//! telemetry = false
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::error::ReviewError;
use crate::api::locator::{ApiBaseUrl, DrinkId};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print a plain-text summary of the drink and exit.
    Summary,
    /// Interactive TUI for reading and writing reviews.
    ReviewTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use drink_reviews::DrinkReviewsConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = DrinkReviewsConfig::load().expect("failed to load configuration");
/// let drink_id = config.require_drink_id().expect("drink id required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "DRINK_REVIEWS",
    discovery(
        dotfile_name = ".drink-reviews.toml",
        config_file_name = "drink-reviews.toml",
        app_name = "drink-reviews"
    )
)]
pub struct DrinkReviewsConfig {
    /// Identifier of the drink to review.
    ///
    /// Can be provided via:
    /// - CLI: `--drink-id <ID>` or `-d <ID>`
    /// - Environment: `DRINK_REVIEWS_DRINK_ID`
    /// - Config file: `drink_id = "..."`
    #[ortho_config(cli_short = 'd')]
    pub drink_id: Option<String>,

    /// Base URL of the review API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `DRINK_REVIEWS_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    ///
    /// Defaults to `http://localhost:3000`.
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: String,

    /// Per-request timeout, in seconds.
    ///
    /// Defaults to 10 seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Prints a plain-text summary instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    #[ortho_config(cli_short = 's')]
    pub summary: bool,

    /// Writes one JSON line per API request to stderr.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

impl Default for DrinkReviewsConfig {
    fn default() -> Self {
        Self {
            drink_id: None,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            summary: false,
            telemetry: false,
        }
    }
}

impl DrinkReviewsConfig {
    /// Returns the validated drink identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingDrinkId`] when none is configured, or
    /// [`ReviewError::InvalidDrinkId`] when the configured value is blank.
    pub fn require_drink_id(&self) -> Result<DrinkId, ReviewError> {
        let raw = self
            .drink_id
            .as_deref()
            .ok_or(ReviewError::MissingDrinkId)?;
        DrinkId::new(raw)
    }

    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the URL cannot be parsed.
    pub fn api_base_url(&self) -> Result<ApiBaseUrl, ReviewError> {
        ApiBaseUrl::parse(&self.api_base_url)
    }

    /// Returns the request timeout, treating zero as the default.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        if self.request_timeout_seconds == 0 {
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS)
        } else {
            Duration::from_secs(self.request_timeout_seconds)
        }
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::ReviewTui
        }
    }
}

#[cfg(test)]
mod tests;
