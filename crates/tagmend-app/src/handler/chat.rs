//! Chat workflow handlers
//!
//! States: `Idle → Pending → Idle`, independent of the correction workflow.
//! Failures land in the popup (not the correction banner), so overlapping
//! requests cannot overwrite each other's error surface.

use crate::state::{AppState, ChatPhase};

use super::{Task, UpdateAction, UpdateResult};

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let question = state.chat.input.trim().to_string();
    if question.is_empty() || state.chat.is_pending() {
        // Re-entrancy/empty guard: log and stored response stay unchanged.
        return UpdateResult::none();
    }

    state.record(format!("Chat query: {question}"));
    state.chat.response = None;
    state.chat.response_is_error = false;
    state.chat.popup_visible = true;
    state.chat.phase = ChatPhase::Pending;
    state.chat.input.clear();

    UpdateResult::action(UpdateAction::SpawnTask(Task::AskQuestion {
        html: state.html.to_text(),
        css: state.css.to_text(),
        question,
    }))
}

pub fn handle_succeeded(state: &mut AppState, answer: String) -> UpdateResult {
    state.chat.response = Some(answer);
    state.chat.response_is_error = false;
    state.chat.phase = ChatPhase::Idle;
    state.record("Chat answer received");
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, message: String) -> UpdateResult {
    state.record(format!("Chat request failed: {message}"));
    state.chat.response = Some(format!("Error: {message}"));
    state.chat.response_is_error = true;
    state.chat.phase = ChatPhase::Idle;
    UpdateResult::none()
}

/// Hide the popup. The stored response is kept, so re-showing is a pure
/// visibility toggle.
pub fn handle_dismiss(state: &mut AppState) -> UpdateResult {
    state.chat.popup_visible = false;
    UpdateResult::none()
}

/// Re-show the stored response, if any.
pub fn handle_show(state: &mut AppState) -> UpdateResult {
    if state.chat.response.is_some() || state.chat.is_pending() {
        state.chat.popup_visible = true;
    }
    UpdateResult::none()
}
