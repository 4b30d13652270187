//! `reqwest` client construction for the review gateway.

use std::time::Duration;

use reqwest::Client;

use crate::api::error::ReviewError;

/// Builds the HTTP client shared by every request of one gateway.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when the TLS backend or client
/// settings cannot be initialised.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, ReviewError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| ReviewError::Configuration {
            message: format!("failed to configure review API client: {error}"),
        })
}
