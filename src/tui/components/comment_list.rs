//! Comment list component.
//!
//! Renders each comment read-only with its edit/delete actions, or, for the
//! comment in edit mode, the pending edit text with its save action.

use crate::api::Comment;
use crate::tui::state::CommentEdit;

use super::text_truncate::truncate_to_display_width;

/// Context for rendering the comment list.
#[derive(Debug, Clone, Copy)]
pub struct CommentListViewContext<'a> {
    /// Comments in display order.
    pub comments: &'a [Comment],
    /// Cursor position (0-indexed).
    pub cursor_position: usize,
    /// Whether the cursor marker and action hints are shown.
    pub show_cursor: bool,
    /// Active edit session, if any.
    pub edit: Option<&'a CommentEdit>,
    /// Maximum row width in columns.
    pub max_width: usize,
}

/// Component for displaying the drink's comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentListComponent;

impl CommentListComponent {
    /// Renders the list, one row per comment.
    #[must_use]
    pub fn view(ctx: &CommentListViewContext<'_>) -> String {
        if ctx.comments.is_empty() {
            return "  No comments yet.\n".to_owned();
        }

        let mut output = String::new();
        for (index, comment) in ctx.comments.iter().enumerate() {
            let is_selected = ctx.show_cursor && index == ctx.cursor_position;
            let line = Self::format_row(ctx, comment, is_selected);
            output.push_str(&truncate_to_display_width(&line, ctx.max_width));
            output.push('\n');
        }
        output
    }

    fn format_row(ctx: &CommentListViewContext<'_>, comment: &Comment, is_selected: bool) -> String {
        if let Some(edit) = ctx.edit.filter(|edit| edit.comment_id() == &comment.id) {
            return format!("> [editing] {}_  [Enter:save]", single_row(edit.text()));
        }

        let text = single_row(&comment.text);
        if is_selected {
            format!("> {text}  [e:edit d:delete]")
        } else {
            format!("  {text}")
        }
    }
}

/// Shows line breaks and tabs as spaces so each comment keeps to one row.
fn single_row(text: &str) -> String {
    text.chars()
        .map(|character| if character.is_control() { ' ' } else { character })
        .collect()
}
