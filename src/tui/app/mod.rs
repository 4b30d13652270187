//! Main TUI application model implementing the MVU pattern.
//!
//! `DrinkReviewApp` is the view controller for one drink: it owns the view
//! state, issues one asynchronous request per user action, and applies each
//! server response when it arrives.
//!
//! # Module Structure
//!
//! - `commands`: Request commands and failure recording
//! - `load_handlers`: Initial load, reload, and outcome dispatch
//! - `comment_handlers`: New comment form and comment edit/delete
//! - `rating_handlers`: Star selection and submission
//! - `lifecycle_handlers`: Cursor, help, resize, and quit
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: `bubbletea_rs::Model` implementation

use bubbletea_rs::Cmd;

use crate::api::{AverageRating, Comment, CommentId, Drink, Rating};

use super::input::InputContext;
use super::messages::AppMsg;
use super::state::{CommentEdit, TextInput};
use super::storage::ReviewContext;

mod commands;
mod comment_handlers;
mod lifecycle_handlers;
mod load_handlers;
mod model_impl;
mod rating_handlers;
mod rendering;

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

/// Main application model for the drink review TUI.
#[derive(Debug)]
pub struct DrinkReviewApp {
    /// Drink identifier and collaborators; absent when start-up wiring was
    /// skipped.
    context: Option<ReviewContext>,
    /// Whether the drink bundle is still loading.
    pub(crate) loading: bool,
    /// Error message replacing the whole view once set.
    pub(crate) error: Option<String>,
    /// Drink details, once loaded.
    pub(crate) drink: Option<Drink>,
    /// Comments in display order.
    pub(crate) comments: Vec<Comment>,
    /// Pending new-comment text.
    pub(crate) new_comment: TextInput,
    /// Rating picked but not yet submitted.
    pub(crate) selected_rating: Option<Rating>,
    /// Comment currently in edit mode.
    pub(crate) edit: Option<CommentEdit>,
    /// Locally tracked average rating.
    pub(crate) average_rating: AverageRating,
    /// Cursor over `comments`.
    pub(crate) cursor: usize,
    /// Whether key presses go to the new-comment input.
    pub(crate) composing: bool,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    width: u16,
    height: u16,
}

impl DrinkReviewApp {
    /// Creates an application for the drink in `context`, in loading state.
    ///
    /// Call [`DrinkReviewApp::load_command`] (or use [`DrinkReviewApp::mount`])
    /// to start fetching.
    #[must_use]
    pub fn new(context: ReviewContext) -> Self {
        Self::with_context(Some(context))
    }

    /// Creates an application with no gateway; every request fails.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::with_context(None)
    }

    /// Creates the application and the command performing the initial load.
    #[must_use]
    pub fn mount(context: ReviewContext) -> (Self, Option<Cmd>) {
        let mut app = Self::new(context);
        let cmd = app.load_command();
        (app, cmd)
    }

    fn with_context(context: Option<ReviewContext>) -> Self {
        Self {
            context,
            loading: true,
            error: None,
            drink: None,
            comments: Vec::new(),
            new_comment: TextInput::default(),
            selected_rating: None,
            edit: None,
            average_rating: AverageRating::default(),
            cursor: 0,
            composing: false,
            show_help: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Returns whether the drink bundle is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the error message, if one is set.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the loaded drink.
    #[must_use]
    pub const fn drink(&self) -> Option<&Drink> {
        self.drink.as_ref()
    }

    /// Returns the comments in display order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the pending new-comment text.
    #[must_use]
    pub const fn new_comment_text(&self) -> &str {
        self.new_comment.text()
    }

    /// Returns the selected rating, with zero meaning none selected.
    #[must_use]
    pub fn selected_rating_value(&self) -> u8 {
        self.selected_rating.map_or(0, Rating::get)
    }

    /// Returns the identifier of the comment in edit mode.
    #[must_use]
    pub fn editing_comment_id(&self) -> Option<&CommentId> {
        self.edit.as_ref().map(CommentEdit::comment_id)
    }

    /// Returns the pending edit text.
    #[must_use]
    pub fn edit_text(&self) -> Option<&str> {
        self.edit.as_ref().map(CommentEdit::text)
    }

    /// Returns the locally tracked average rating.
    #[must_use]
    pub const fn average_rating(&self) -> AverageRating {
        self.average_rating
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Returns the comment under the cursor.
    #[must_use]
    pub fn selected_comment(&self) -> Option<&Comment> {
        self.comments.get(self.cursor)
    }

    /// Moves the cursor to the comment with `id`.
    ///
    /// Returns `false` when no such comment is listed.
    pub fn select_by_id(&mut self, id: &CommentId) -> bool {
        let Some(index) = self.comments.iter().position(|comment| &comment.id == id) else {
            return false;
        };
        self.cursor = index;
        true
    }

    /// Returns whether key presses go to the new-comment input.
    #[must_use]
    pub const fn is_composing(&self) -> bool {
        self.composing
    }

    /// Returns the current input context for context-aware key mapping.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.loading || self.error.is_some() {
            InputContext::Status
        } else if self.edit.is_some() {
            InputContext::Editing
        } else if self.composing {
            InputContext::Composing
        } else {
            InputContext::Browse
        }
    }

    /// Keeps the cursor inside the comment list.
    pub(crate) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.comments.len().saturating_sub(1));
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function; it delegates to specialised handlers
    /// per message category and returns any resulting command.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_compose() {
            return self.handle_compose_msg(msg);
        }
        if msg.is_comment() {
            return self.handle_comment_msg(msg);
        }
        if msg.is_rating() {
            return self.handle_rating_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}

#[cfg(test)]
mod tests;
