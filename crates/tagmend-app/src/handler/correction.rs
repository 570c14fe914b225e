//! Correction workflow handlers
//!
//! States: `Editing → Requesting → {Reviewing | Editing(with error)}`.
//! A request is serialized: while one is outstanding the trigger is
//! rendered disabled and a concurrent invocation is discarded here. The
//! spawned task always sends exactly one completion message, so
//! `Requesting` never sticks.

use tagmend_core::CorrectionSet;
use tracing::info;

use crate::state::{AppState, CorrectionPhase};

use super::{Task, UpdateAction, UpdateResult};

pub fn handle_request(state: &mut AppState) -> UpdateResult {
    if state.correction.is_requesting() {
        // Already in flight; a second request cannot be issued.
        return UpdateResult::none();
    }

    if state.html.is_blank() && state.css.is_blank() {
        // Validation guard: no collaborator call is made.
        state.correction.error = Some("Both editors are empty - nothing to review.".to_string());
        state.record("Correction request rejected: both editors are empty");
        return UpdateResult::none();
    }

    state.correction.error = None;
    state.correction.set = None;
    state.correction.phase = CorrectionPhase::Requesting;
    state.record("Requesting corrections...");

    UpdateResult::action(UpdateAction::SpawnTask(Task::RequestCorrection {
        html: state.html.to_text(),
        css: state.css.to_text(),
    }))
}

pub fn handle_succeeded(state: &mut AppState, set: CorrectionSet) -> UpdateResult {
    info!(
        html_lines = set.html.len(),
        css_lines = set.css.len(),
        errors = set.error_count(),
        "correction set received"
    );
    state.record(format!(
        "Corrections received: {} issue(s) flagged",
        set.error_count()
    ));
    state.correction.set = Some(set);
    state.correction.phase = CorrectionPhase::Reviewing;
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, message: String) -> UpdateResult {
    state.record(format!("Correction request failed: {message}"));
    state.correction.error = Some(message);
    state.correction.phase = CorrectionPhase::Editing;
    UpdateResult::none()
}

/// Reduce the reviewed set into the code buffers, as-is.
pub fn handle_accept(state: &mut AppState) -> UpdateResult {
    if !state.correction.is_reviewing() {
        return UpdateResult::none();
    }
    let Some(set) = state.correction.set.take() else {
        return UpdateResult::none();
    };

    state.html.set_text(&set.corrected_html());
    state.css.set_text(&set.corrected_css());
    state.correction.phase = CorrectionPhase::Editing;
    state.record("Corrections applied");
    UpdateResult::none()
}

/// Discard the reviewed set without touching the buffers.
pub fn handle_edit_again(state: &mut AppState) -> UpdateResult {
    if !state.correction.is_reviewing() {
        return UpdateResult::none();
    }
    state.correction.set = None;
    state.correction.phase = CorrectionPhase::Editing;
    state.record("Corrections discarded");
    UpdateResult::none()
}
