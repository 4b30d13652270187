//! Star rating widget.
//!
//! Shows five stars: the pending selection when the user has picked one,
//! otherwise the drink's average rounded to the nearest star.

use crate::api::{AverageRating, MAX_RATING, Rating};

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Context for rendering the star rating widget.
#[derive(Debug, Clone, Copy)]
pub struct StarRatingViewContext {
    /// Rating the user picked but has not submitted yet.
    pub selected: Option<Rating>,
    /// Current average, used as the widget's initial rating.
    pub average: AverageRating,
}

/// Component rendering the star selector row.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarRatingComponent;

impl StarRatingComponent {
    /// Renders the widget as a single line.
    #[must_use]
    pub fn view(ctx: &StarRatingViewContext) -> String {
        let filled = ctx
            .selected
            .map_or_else(|| ctx.average.filled_stars(), |rating| usize::from(rating.get()));
        let stars = render_stars(filled);
        match ctx.selected {
            Some(rating) => format!("Your rating: {stars} ({}/{MAX_RATING})\n", rating.get()),
            None => format!("Your rating: {stars} (press 1-{MAX_RATING} to rate)\n"),
        }
    }
}

fn render_stars(filled: usize) -> String {
    let total = usize::from(MAX_RATING);
    let filled_count = filled.min(total);
    std::iter::repeat_n(FILLED_STAR, filled_count)
        .chain(std::iter::repeat_n(EMPTY_STAR, total - filled_count))
        .collect()
}
