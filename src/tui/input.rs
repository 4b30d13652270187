//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The same key means different things
//! depending on whether the user is browsing or typing into an input.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Which part of the view currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Loading placeholder or error view; only reload, help, and quit apply.
    Status,
    /// Moving over comments, rating, and triggering actions.
    Browse,
    /// Typing into the new-comment input.
    Composing,
    /// Typing into the edit buffer of an existing comment.
    Editing,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    if is_interrupt(key) {
        return Some(AppMsg::Quit);
    }

    match context {
        InputContext::Status => map_status_key(key.key),
        InputContext::Browse => map_browse_key(key.key),
        InputContext::Composing => map_compose_key(key.key),
        InputContext::Editing => map_edit_key(key.key),
    }
}

fn is_interrupt(key: &KeyMsg) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c')
}

const fn map_status_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('r' | 'R') => Some(AppMsg::ReloadRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_browse_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('c' | 'a') | KeyCode::Enter => Some(AppMsg::StartComposing),
        KeyCode::Char('e') => Some(AppMsg::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(AppMsg::DeleteSelected),
        KeyCode::Char('s') => Some(AppMsg::SubmitRating),
        KeyCode::Char('R') => Some(AppMsg::ReloadRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char(digit @ '0'..='5') => digit
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(AppMsg::SelectRating),
        _ => None,
    }
}

const fn map_compose_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::SubmitComment),
        KeyCode::Esc => Some(AppMsg::StopComposing),
        KeyCode::Backspace => Some(AppMsg::ComposeBackspace),
        KeyCode::Char(character) => Some(AppMsg::ComposeInsertChar(character)),
        _ => None,
    }
}

const fn map_edit_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::CommitEdit),
        KeyCode::Esc => Some(AppMsg::CancelEdit),
        KeyCode::Backspace => Some(AppMsg::EditBackspace),
        KeyCode::Char(character) => Some(AppMsg::EditInsertChar(character)),
        _ => None,
    }
}
