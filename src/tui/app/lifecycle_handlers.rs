//! Lifecycle and window handlers for the review TUI.
//!
//! This module handles cursor movement, terminal resize events, and
//! high-level lifecycle messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::DrinkReviewApp;
use crate::tui::messages::AppMsg;

impl DrinkReviewApp {
    /// Dispatches navigation, lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            AppMsg::CursorDown => {
                self.cursor = self.cursor.saturating_add(1);
                self.clamp_cursor();
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }
}
