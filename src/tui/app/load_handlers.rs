//! Drink loading and request outcome handlers.
//!
//! Outcomes of comment and rating requests are forwarded to their own
//! handler modules; this module owns the initial load, reload, and the shared
//! failure path.

use bubbletea_rs::Cmd;

use super::DrinkReviewApp;
use crate::api::DrinkBundle;
use crate::tui::messages::AppMsg;

impl DrinkReviewApp {
    /// Dispatches reload requests and request outcomes.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ReloadRequested => self.handle_reload(),
            AppMsg::DrinkLoaded(bundle) => {
                self.handle_drink_loaded(bundle);
                None
            }
            AppMsg::CommentAdded(comment) => self.handle_comment_added(comment),
            AppMsg::CommentDeleted(comment_id) => self.handle_comment_deleted(comment_id),
            AppMsg::CommentUpdated { requested, comment } => {
                self.handle_comment_updated(requested, comment)
            }
            AppMsg::RatingSubmitted(rating) => self.handle_rating_submitted(*rating),
            AppMsg::RequestFailed { operation, detail } => {
                self.record_failure(*operation, detail);
                None
            }
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Resets every piece of view state and fetches the drink again.
    ///
    /// Terminal dimensions survive the reset since no resize event follows.
    fn handle_reload(&mut self) -> Option<Cmd> {
        let (width, height) = (self.width, self.height);
        *self = Self::with_context(self.context.take());
        self.width = width;
        self.height = height;
        self.load_command()
    }

    fn handle_drink_loaded(&mut self, bundle: &DrinkBundle) {
        tracing::debug!(
            comments = bundle.comments.len(),
            average = %bundle.average_rating,
            "drink bundle loaded"
        );
        self.loading = false;
        self.drink = Some(bundle.drink.clone());
        self.comments.clone_from(&bundle.comments);
        self.average_rating = bundle.average_rating;
        self.clamp_cursor();
    }
}
