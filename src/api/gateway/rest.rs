//! `reqwest`-backed implementation of [`DrinkReviewGateway`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::DrinkReviewGateway;
use super::client::build_http_client;
use super::error_mapping::{map_http_error, map_transport_error};
use crate::api::error::ReviewError;
use crate::api::locator::{ApiBaseUrl, CommentId, DrinkId};
use crate::api::models::{ApiComment, ApiDrinkBundle, Comment, DrinkBundle};
use crate::api::rating::Rating;

/// HTTP gateway for the drink review endpoints.
#[derive(Debug, Clone)]
pub struct HttpDrinkReviewGateway {
    client: Client,
    base_url: ApiBaseUrl,
}

#[derive(Debug, Serialize)]
struct CommentPayload<'a> {
    comment: &'a str,
}

#[derive(Debug, Serialize)]
struct RatingPayload {
    rating: Rating,
}

impl HttpDrinkReviewGateway {
    /// Creates a gateway for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(base_url: ApiBaseUrl, timeout: Duration) -> Result<Self, ReviewError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
        })
    }

    /// Returns the API base URL this gateway targets.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Sends a request and rejects non-success statuses.
    async fn send(operation: &str, request: RequestBuilder) -> Result<Response, ReviewError> {
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        tracing::debug!("{operation} answered with status {status}");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_http_error(operation, status, &body))
    }

    async fn decode<T: DeserializeOwned>(
        operation: &str,
        response: Response,
    ) -> Result<T, ReviewError> {
        response
            .json::<T>()
            .await
            .map_err(|error| map_transport_error(operation, &error))
    }
}

#[async_trait]
impl DrinkReviewGateway for HttpDrinkReviewGateway {
    async fn drink_bundle(&self, drink_id: &DrinkId) -> Result<DrinkBundle, ReviewError> {
        let operation = "fetch drink";
        let url = self.base_url.drink(drink_id)?;
        let response = Self::send(operation, self.client.get(url)).await?;
        let bundle: ApiDrinkBundle = Self::decode(operation, response).await?;
        Ok(bundle.into())
    }

    async fn add_comment(&self, drink_id: &DrinkId, text: &str) -> Result<Comment, ReviewError> {
        let operation = "add comment";
        let url = self.base_url.comments(drink_id)?;
        let request = self.client.post(url).json(&CommentPayload { comment: text });
        let response = Self::send(operation, request).await?;
        let comment: ApiComment = Self::decode(operation, response).await?;
        Ok(comment.into())
    }

    async fn delete_comment(
        &self,
        drink_id: &DrinkId,
        comment_id: &CommentId,
    ) -> Result<(), ReviewError> {
        let url = self.base_url.comment(drink_id, comment_id)?;
        Self::send("delete comment", self.client.delete(url)).await?;
        Ok(())
    }

    async fn edit_comment(
        &self,
        drink_id: &DrinkId,
        comment_id: &CommentId,
        text: &str,
    ) -> Result<Comment, ReviewError> {
        let operation = "edit comment";
        let url = self.base_url.comment(drink_id, comment_id)?;
        let request = self.client.patch(url).json(&CommentPayload { comment: text });
        let response = Self::send(operation, request).await?;
        let comment: ApiComment = Self::decode(operation, response).await?;
        Ok(comment.into())
    }

    async fn submit_rating(&self, drink_id: &DrinkId, rating: Rating) -> Result<(), ReviewError> {
        let url = self.base_url.rating(drink_id)?;
        let request = self.client.post(url).json(&RatingPayload { rating });
        Self::send("submit rating", request).await?;
        Ok(())
    }
}
