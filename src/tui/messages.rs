//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::api::{Comment, CommentId, DrinkBundle, Rating};

/// The remote operations the review view performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOperation {
    /// Initial (or reloaded) fetch of the drink bundle.
    LoadDrink,
    /// Comment creation.
    AddComment,
    /// Comment deletion.
    DeleteComment,
    /// Comment text update.
    EditComment,
    /// Star rating submission.
    SubmitRating,
}

impl ReviewOperation {
    /// Stable label used in telemetry and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoadDrink => "load_drink",
            Self::AddComment => "add_comment",
            Self::DeleteComment => "delete_comment",
            Self::EditComment => "edit_comment",
            Self::SubmitRating => "submit_rating",
        }
    }

    /// The message shown to the user when the operation fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::LoadDrink => "Failed to fetch drink data",
            Self::AddComment => "Failed to add comment",
            Self::DeleteComment => "Failed to delete comment",
            Self::EditComment => "Failed to update comment",
            Self::SubmitRating => "Failed to add rating",
        }
    }
}

/// Messages for the drink review TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the comment cursor up one entry.
    CursorUp,
    /// Move the comment cursor down one entry.
    CursorDown,

    // New comment form
    /// Focus the new-comment input.
    StartComposing,
    /// Append a character to the new-comment input.
    ComposeInsertChar(char),
    /// Remove the last character of the new-comment input.
    ComposeBackspace,
    /// Leave the new-comment input, keeping its text.
    StopComposing,
    /// Send the new-comment input to the server.
    SubmitComment,

    // Existing comments
    /// Delete the comment under the cursor.
    DeleteSelected,
    /// Start editing the comment under the cursor.
    EditSelected,
    /// Append a character to the edit buffer.
    EditInsertChar(char),
    /// Remove the last character of the edit buffer.
    EditBackspace,
    /// Send the edit buffer to the server.
    CommitEdit,
    /// Leave edit mode without saving.
    CancelEdit,

    // Rating
    /// Record a star rating; zero clears the selection.
    SelectRating(u8),
    /// Send the selected rating to the server.
    SubmitRating,

    // Request outcomes
    /// Discard all view state and fetch the drink again.
    ReloadRequested,
    /// The drink bundle arrived.
    DrinkLoaded(DrinkBundle),
    /// The server created a comment.
    CommentAdded(Comment),
    /// The server deleted a comment.
    CommentDeleted(CommentId),
    /// The server updated a comment.
    CommentUpdated {
        /// Identifier the update was sent for.
        requested: CommentId,
        /// The server's copy of the updated comment.
        comment: Comment,
    },
    /// The server accepted a rating.
    RatingSubmitted(Rating),
    /// A request failed.
    RequestFailed {
        /// Which operation failed.
        operation: ReviewOperation,
        /// Detailed error for logs; the user sees the generic message.
        detail: String,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for messages that edit the new-comment input.
    #[must_use]
    pub const fn is_compose(&self) -> bool {
        matches!(
            self,
            Self::StartComposing
                | Self::ComposeInsertChar(_)
                | Self::ComposeBackspace
                | Self::StopComposing
                | Self::SubmitComment
        )
    }

    /// Returns true for messages acting on existing comments.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(
            self,
            Self::DeleteSelected
                | Self::EditSelected
                | Self::EditInsertChar(_)
                | Self::EditBackspace
                | Self::CommitEdit
                | Self::CancelEdit
        )
    }

    /// Returns true for rating messages.
    #[must_use]
    pub const fn is_rating(&self) -> bool {
        matches!(self, Self::SelectRating(_) | Self::SubmitRating)
    }

    /// Returns true for reload requests and request outcomes.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::ReloadRequested
                | Self::DrinkLoaded(_)
                | Self::CommentAdded(_)
                | Self::CommentDeleted(_)
                | Self::CommentUpdated { .. }
                | Self::RatingSubmitted(_)
                | Self::RequestFailed { .. }
        )
    }
}
