//! Error types exposed by the drink review API layer.

use thiserror::Error;

/// Errors surfaced while validating input or communicating with the review API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// No drink identifier was configured.
    #[error("drink identifier is required (use --drink-id or -d)")]
    MissingDrinkId,

    /// The drink identifier was blank after trimming.
    #[error("drink identifier must not be blank")]
    InvalidDrinkId,

    /// The API base URL could not be parsed or cannot carry a path.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// A star rating outside the accepted range was supplied.
    #[error("rating must be between 1 and 5, got {value}")]
    InvalidRating {
        /// The rejected rating value.
        value: u8,
    },

    /// The review API answered with a non-success status.
    #[error("review API error: {message}")]
    Api {
        /// Status and server-provided detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the review API.
    #[error("network error talking to the review API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body could not be decoded.
    #[error("could not decode review API response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
