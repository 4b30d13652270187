//! UI components for the drink review TUI.
//!
//! Each component is a stateless renderer over a borrowed view context,
//! following the bubbletea-rs Model-View pattern.

mod comment_list;
mod drink_summary;
mod star_rating;
pub(crate) mod text_truncate;

pub use comment_list::{CommentListComponent, CommentListViewContext};
pub use drink_summary::{DrinkSummaryComponent, DrinkSummaryViewContext};
pub use star_rating::{StarRatingComponent, StarRatingViewContext};
