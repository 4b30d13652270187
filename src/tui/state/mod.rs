//! State management for the review TUI.
//!
//! This module contains the input buffers backing the new-comment form and
//! in-place comment editing.

mod comment_edit;
mod text_input;

pub use comment_edit::CommentEdit;
pub use text_input::TextInput;
