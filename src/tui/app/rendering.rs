//! Rendering logic for the review TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::DrinkReviewApp;
use crate::tui::components::{
    CommentListComponent, CommentListViewContext, DrinkSummaryComponent, DrinkSummaryViewContext,
    StarRatingComponent, StarRatingViewContext,
};
use crate::tui::input::InputContext;

const NEW_COMMENT_PLACEHOLDER: &str = "Add a comment...";

impl DrinkReviewApp {
    /// Renders the frame body for the current state.
    ///
    /// Loading, error and populated views are mutually exclusive. Loading
    /// takes precedence; after that, once an error is set nothing but the
    /// error text and its status line is shown.
    pub(super) fn render_body(&self) -> String {
        if self.loading {
            return "Loading...\n".to_owned();
        }
        if let Some(error) = &self.error {
            return format!("{error}\n\n{}", self.render_status_bar());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_drink());
        output.push('\n');
        output.push_str(&format!("Average Rating: {}\n", self.average_rating));
        output.push_str(&StarRatingComponent::view(&StarRatingViewContext {
            selected: self.selected_rating,
            average: self.average_rating,
        }));
        output.push('\n');
        output.push_str(&format!("Comments ({})\n", self.comments.len()));
        output.push_str(&CommentListComponent::view(&CommentListViewContext {
            comments: &self.comments,
            cursor_position: self.cursor,
            show_cursor: self.input_context() == InputContext::Browse,
            edit: self.edit.as_ref(),
            max_width: self.content_width(),
        }));
        output.push('\n');
        output.push_str(&self.render_comment_form());
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Drink Reviews";
        self.context.as_ref().map_or_else(
            || format!("{title}\n"),
            |context| format!("{title} - drink {}\n", context.drink_id()),
        )
    }

    fn render_drink(&self) -> String {
        self.drink.as_ref().map_or_else(String::new, |drink| {
            DrinkSummaryComponent::view(&DrinkSummaryViewContext {
                drink,
                max_width: self.content_width(),
            })
        })
    }

    /// Renders the new-comment input, showing the placeholder when empty.
    fn render_comment_form(&self) -> String {
        let text = self.new_comment.text();
        let cursor = if self.composing { "_" } else { "" };
        if text.is_empty() && !self.composing {
            return format!("[ {NEW_COMMENT_PLACEHOLDER} ]\n");
        }
        format!("[ {text}{cursor} ]\n")
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.input_context() {
            InputContext::Status => "r:reload  ?:help  q:quit",
            InputContext::Browse => {
                "j/k:move  c:comment  e:edit  d:delete  1-5:rate  s:submit rating  ?:help  q:quit"
            }
            InputContext::Composing => "Enter:post comment  Esc:done",
            InputContext::Editing => "Enter:save  Esc:cancel",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Comments:
  j, Down    Move cursor down
  k, Up      Move cursor up
  c, a       Write a new comment
  Enter      Post the new comment / save an edit
  Esc        Leave the comment form / cancel an edit
  e          Edit selected comment
  d, Del     Delete selected comment

Rating:
  1-5        Select a star rating
  0          Clear the selection
  s          Submit the selected rating

Other:
  r          Reload the drink (after an error)
  R          Reload the drink
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    fn content_width(&self) -> usize {
        usize::from(self.width).max(1)
    }
}
