//! Identity wrappers and endpoint construction for the review API.

use std::fmt;

use serde::Deserialize;
use url::Url;

use super::error::ReviewError;

/// Drink identifier wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrinkId(String);

impl DrinkId {
    /// Validates that the identifier is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidDrinkId`] when the supplied string is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ReviewError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReviewError::InvalidDrinkId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DrinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-assigned comment identifier.
///
/// Servers hand these out either as JSON strings or as numbers; both are kept
/// in their textual form because the identifier is only ever echoed back in
/// request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawCommentId")]
pub struct CommentId(String);

impl CommentId {
    /// Wraps an identifier value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCommentId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawCommentId> for CommentId {
    fn from(value: RawCommentId) -> Self {
        match value {
            RawCommentId::Text(text) => Self(text),
            RawCommentId::Number(number) => Self(number.to_string()),
        }
    }
}

/// Base URL of the review API, e.g. `http://localhost:3000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parses and validates the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the input cannot be parsed or
    /// is not a hierarchical URL that can carry request paths.
    pub fn parse(input: &str) -> Result<Self, ReviewError> {
        let url = Url::parse(input.trim())
            .map_err(|error| ReviewError::InvalidUrl(error.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ReviewError::InvalidUrl(format!(
                "{input} cannot be used as a base URL"
            )));
        }
        Ok(Self(url))
    }

    /// Borrow the underlying URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// `/api/drinks/{drinkId}`
    pub(crate) fn drink(&self, drink_id: &DrinkId) -> Result<Url, ReviewError> {
        self.endpoint(&["api", "drinks", drink_id.as_str()])
    }

    /// `/api/drinks/{drinkId}/comment`
    pub(crate) fn comments(&self, drink_id: &DrinkId) -> Result<Url, ReviewError> {
        self.endpoint(&["api", "drinks", drink_id.as_str(), "comment"])
    }

    /// `/api/drinks/{drinkId}/comment/{commentId}`
    pub(crate) fn comment(
        &self,
        drink_id: &DrinkId,
        comment_id: &CommentId,
    ) -> Result<Url, ReviewError> {
        self.endpoint(&[
            "api",
            "drinks",
            drink_id.as_str(),
            "comment",
            comment_id.as_str(),
        ])
    }

    /// `/api/drinks/{drinkId}/rating`
    pub(crate) fn rating(&self, drink_id: &DrinkId) -> Result<Url, ReviewError> {
        self.endpoint(&["api", "drinks", drink_id.as_str(), "rating"])
    }

    /// Appends percent-encoded path segments to the base path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ReviewError> {
        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|()| ReviewError::InvalidUrl(self.0.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
