//! Rating handlers for the review TUI.

use bubbletea_rs::Cmd;

use super::DrinkReviewApp;
use crate::api::Rating;
use crate::tui::messages::{AppMsg, ReviewOperation};

impl DrinkReviewApp {
    /// Dispatches rating messages.
    pub(super) fn handle_rating_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SelectRating(value) => {
                self.select_rating(*value);
                None
            }
            AppMsg::SubmitRating => self.handle_submit_rating(),
            _ => {
                // Unreachable: caller filters to rating messages.
                None
            }
        }
    }

    /// Records a pending rating; zero clears it and out-of-range values are
    /// ignored.
    fn select_rating(&mut self, value: u8) {
        if value == 0 {
            self.selected_rating = None;
            return;
        }
        match Rating::new(value) {
            Ok(rating) => self.selected_rating = Some(rating),
            Err(error) => tracing::debug!(%error, "ignoring rating selection"),
        }
    }

    /// Sends the selected rating; does nothing when none is selected.
    fn handle_submit_rating(&mut self) -> Option<Cmd> {
        let rating = self.selected_rating?;
        self.request(
            ReviewOperation::SubmitRating,
            move |gateway, drink_id| async move { gateway.submit_rating(&drink_id, rating).await },
            move |()| AppMsg::RatingSubmitted(rating),
        )
    }

    /// Folds the accepted rating into the local average and clears the
    /// selection.
    ///
    /// The server recomputes the true average; the local copy is only an
    /// approximation until the next load.
    pub(super) fn handle_rating_submitted(&mut self, rating: Rating) -> Option<Cmd> {
        self.average_rating = self.average_rating.approximate_after(rating);
        self.selected_rating = None;
        None
    }
}
