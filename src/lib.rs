//! Drink review library crate.
//!
//! The library wraps `reqwest` to load a drink together with its comments and
//! average rating, and drives a bubbletea-rs terminal view for adding,
//! editing, and deleting comments and submitting star ratings.

pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiBaseUrl, AverageRating, Comment, CommentId, Drink, DrinkBundle, DrinkId,
    DrinkReviewGateway, HttpDrinkReviewGateway, Rating, ReviewError,
};
pub use config::{DrinkReviewsConfig, OperationMode};
