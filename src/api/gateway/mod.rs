//! Gateways for talking to the drink review API.
//!
//! The trait-based design enables mocking in tests while the `reqwest`
//! implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod rest;

pub use rest::HttpDrinkReviewGateway;

use async_trait::async_trait;

use crate::api::error::ReviewError;
use crate::api::locator::{CommentId, DrinkId};
use crate::api::models::{Comment, DrinkBundle};
use crate::api::rating::Rating;

/// Gateway exposing the drink, comment, and rating endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrinkReviewGateway: Send + Sync {
    /// Fetch the drink, its comments, and its average rating in one call.
    async fn drink_bundle(&self, drink_id: &DrinkId) -> Result<DrinkBundle, ReviewError>;

    /// Create a comment and return the server's copy of it.
    async fn add_comment(&self, drink_id: &DrinkId, text: &str) -> Result<Comment, ReviewError>;

    /// Delete a comment.
    async fn delete_comment(
        &self,
        drink_id: &DrinkId,
        comment_id: &CommentId,
    ) -> Result<(), ReviewError>;

    /// Replace a comment's text and return the server's updated copy.
    async fn edit_comment(
        &self,
        drink_id: &DrinkId,
        comment_id: &CommentId,
        text: &str,
    ) -> Result<Comment, ReviewError>;

    /// Submit a star rating for the drink.
    async fn submit_rating(&self, drink_id: &DrinkId, rating: Rating) -> Result<(), ReviewError>;
}
