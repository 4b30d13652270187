//! Client for the drink review REST API.
//!
//! Wraps `reqwest` to load a drink bundle and to create, edit, and delete
//! comments and submit ratings, surfacing failures as [`ReviewError`].

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod rating;

pub use error::ReviewError;
pub use gateway::{DrinkReviewGateway, HttpDrinkReviewGateway};
pub use locator::{ApiBaseUrl, CommentId, DrinkId};
pub use models::{Comment, Drink, DrinkBundle};
pub use rating::{AverageRating, MAX_RATING, MIN_RATING, Rating};
