//! In-place edit session for an existing comment.

use crate::api::CommentId;

use super::TextInput;

/// The comment currently in edit mode and its pending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEdit {
    comment_id: CommentId,
    buffer: TextInput,
}

impl CommentEdit {
    /// Starts editing `comment_id`, seeding the buffer with its current text.
    #[must_use]
    pub fn begin(comment_id: CommentId, current_text: &str) -> Self {
        Self {
            comment_id,
            buffer: TextInput::with_text(current_text),
        }
    }

    /// Returns the comment being edited.
    #[must_use]
    pub const fn comment_id(&self) -> &CommentId {
        &self.comment_id
    }

    /// Returns the pending edit text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Returns the mutable edit buffer.
    pub const fn buffer_mut(&mut self) -> &mut TextInput {
        &mut self.buffer
    }
}
