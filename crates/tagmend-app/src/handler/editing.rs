//! Buffer and chat-input editing handlers
//!
//! Keystroke messages are routed to whichever target has focus: one of the
//! two code buffers, or the single-line chat input. Editors are read-only
//! while a correction set is under review.

use crate::buffer::CodeBuffer;
use crate::state::{AppState, Focus};

use super::UpdateResult;

pub fn handle_insert_char(state: &mut AppState, c: char) -> UpdateResult {
    if state.focus == Focus::ChatInput {
        state.chat.input.push(c);
    } else if let Some(buf) = state.focused_buffer() {
        buf.insert_char(c);
    }
    UpdateResult::none()
}

pub fn handle_insert_newline(state: &mut AppState) -> UpdateResult {
    // The chat input is single-line; Enter submits instead (see keys.rs).
    if let Some(buf) = state.focused_buffer() {
        buf.insert_newline();
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if state.focus == Focus::ChatInput {
        state.chat.input.pop();
    } else if let Some(buf) = state.focused_buffer() {
        buf.backspace();
    }
    UpdateResult::none()
}

pub fn handle_delete(state: &mut AppState) -> UpdateResult {
    if let Some(buf) = state.focused_buffer() {
        buf.delete();
    }
    UpdateResult::none()
}

pub fn handle_cursor(state: &mut AppState, f: impl FnOnce(&mut CodeBuffer)) -> UpdateResult {
    if let Some(buf) = state.focused_buffer() {
        f(buf);
    }
    UpdateResult::none()
}
