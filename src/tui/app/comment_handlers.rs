//! Comment handlers for the review TUI.
//!
//! Covers the new-comment form, in-place editing, deletion, and applying the
//! server's responses to the local comment list. The list only changes once
//! the server has confirmed a mutation.

use bubbletea_rs::Cmd;

use super::DrinkReviewApp;
use crate::api::{Comment, CommentId};
use crate::tui::messages::{AppMsg, ReviewOperation};
use crate::tui::state::CommentEdit;

impl DrinkReviewApp {
    /// Dispatches new-comment form messages.
    pub(super) fn handle_compose_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartComposing => {
                self.composing = true;
                None
            }
            AppMsg::StopComposing => {
                self.composing = false;
                None
            }
            AppMsg::ComposeInsertChar(character) => {
                self.new_comment.push_char(*character);
                None
            }
            AppMsg::ComposeBackspace => {
                self.new_comment.backspace();
                None
            }
            AppMsg::SubmitComment => self.handle_submit_comment(),
            _ => {
                // Unreachable: caller filters to compose messages.
                None
            }
        }
    }

    /// Dispatches messages acting on existing comments.
    pub(super) fn handle_comment_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::DeleteSelected => self.handle_delete_selected(),
            AppMsg::EditSelected => {
                self.handle_edit_selected();
                None
            }
            AppMsg::EditInsertChar(character) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer_mut().push_char(*character);
                }
                None
            }
            AppMsg::EditBackspace => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer_mut().backspace();
                }
                None
            }
            AppMsg::CommitEdit => self.handle_commit_edit(),
            AppMsg::CancelEdit => {
                self.edit = None;
                None
            }
            _ => {
                // Unreachable: caller filters to comment messages.
                None
            }
        }
    }

    /// Sends the new comment, unless the input is blank.
    fn handle_submit_comment(&mut self) -> Option<Cmd> {
        if self.new_comment.is_blank() {
            return None;
        }

        let text = self.new_comment.text().to_owned();
        self.request(
            ReviewOperation::AddComment,
            move |gateway, drink_id| async move { gateway.add_comment(&drink_id, &text).await },
            AppMsg::CommentAdded,
        )
    }

    fn handle_delete_selected(&mut self) -> Option<Cmd> {
        let comment_id = self.selected_comment()?.id.clone();
        self.delete_comment(comment_id)
    }

    /// Sends a delete request for `comment_id`.
    pub(super) fn delete_comment(&mut self, comment_id: CommentId) -> Option<Cmd> {
        let confirmed_id = comment_id.clone();
        self.request(
            ReviewOperation::DeleteComment,
            move |gateway, drink_id| async move {
                gateway.delete_comment(&drink_id, &comment_id).await
            },
            move |()| AppMsg::CommentDeleted(confirmed_id),
        )
    }

    fn handle_edit_selected(&mut self) {
        let Some(comment) = self.selected_comment() else {
            return;
        };
        let edit = CommentEdit::begin(comment.id.clone(), &comment.text);
        self.begin_edit(edit);
    }

    /// Switches a comment into edit mode.
    ///
    /// Any edit already in progress is discarded, and the new-comment input
    /// loses focus.
    pub fn begin_edit(&mut self, edit: CommentEdit) {
        self.composing = false;
        self.edit = Some(edit);
    }

    /// Sends the edit buffer for the comment in edit mode.
    fn handle_commit_edit(&mut self) -> Option<Cmd> {
        let edit = self.edit.as_ref()?;
        let comment_id = edit.comment_id().clone();
        let requested = comment_id.clone();
        let text = edit.text().to_owned();
        self.request(
            ReviewOperation::EditComment,
            move |gateway, drink_id| async move {
                gateway.edit_comment(&drink_id, &comment_id, &text).await
            },
            move |comment| AppMsg::CommentUpdated { requested, comment },
        )
    }

    /// Appends the created comment and clears the input.
    pub(super) fn handle_comment_added(&mut self, comment: &Comment) -> Option<Cmd> {
        self.comments.push(comment.clone());
        self.new_comment.clear();
        None
    }

    /// Removes the deleted comment by identifier.
    pub(super) fn handle_comment_deleted(&mut self, comment_id: &CommentId) -> Option<Cmd> {
        self.comments.retain(|comment| &comment.id != comment_id);
        if self.editing_comment_id() == Some(comment_id) {
            self.edit = None;
        }
        self.clamp_cursor();
        None
    }

    /// Replaces the comment the update was requested for with the server's
    /// copy, in place, and leaves edit mode.
    pub(super) fn handle_comment_updated(
        &mut self,
        requested: &CommentId,
        comment: &Comment,
    ) -> Option<Cmd> {
        if let Some(existing) = self
            .comments
            .iter_mut()
            .find(|existing| &existing.id == requested)
        {
            existing.clone_from(comment);
        }
        self.edit = None;
        None
    }
}
