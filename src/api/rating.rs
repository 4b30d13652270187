//! Star ratings and the locally tracked average rating.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ReviewError;

/// Lowest star rating a user can submit.
pub const MIN_RATING: u8 = 1;
/// Highest star rating a user can submit.
pub const MAX_RATING: u8 = 5;

/// A validated star rating in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Validates a star rating.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidRating`] when `value` falls outside
    /// `1..=5`. Zero means "no rating selected" and is never a valid rating.
    pub const fn new(value: u8) -> Result<Self, ReviewError> {
        if value < MIN_RATING || value > MAX_RATING {
            return Err(ReviewError::InvalidRating { value });
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Average star rating for a drink.
///
/// The server computes the authoritative value; after a rating is submitted
/// the view only approximates it (see [`AverageRating::approximate_after`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct AverageRating(f64);

impl AverageRating {
    /// Wraps a raw average.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw average.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Folds a newly submitted rating into the average as
    /// `(previous + submitted) / 2`.
    ///
    /// This is only a true mean when exactly two ratings exist; later
    /// submissions weigh as much as the whole history before them.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the average is a floating-point value by definition"
    )]
    pub fn approximate_after(self, submitted: Rating) -> Self {
        Self((self.0 + f64::from(submitted.get())) / 2.0)
    }

    /// Number of filled stars when the average is shown on the star widget.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "rounding to the nearest star compares against half-star thresholds"
    )]
    pub fn filled_stars(self) -> usize {
        (MIN_RATING..=MAX_RATING)
            .filter(|star| self.0 >= f64::from(*star) - 0.5)
            .count()
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
