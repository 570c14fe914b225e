//! End-to-end workflow tests through the real dispatch path
//!
//! Drives the update cycle and the background task dispatch with a scripted
//! collaborator: request, completion message, review, accept/reject, and
//! the chat round trip.

use std::sync::Arc;

use tokio::sync::mpsc;

use tagmend_app::message::Message;
use tagmend_app::state::{AppState, ChatPhase, CorrectionPhase};
use tagmend_client::{Collaborator, MockCollaborator};
use tagmend_core::{Correction, CorrectionSet, Error};
use tagmend_tui::actions::{process_message, CollaboratorHandle};

fn scripted(mock: Arc<MockCollaborator>) -> CollaboratorHandle {
    Ok(mock as Arc<dyn Collaborator>)
}

#[tokio::test]
async fn full_correction_review_accept_flow() {
    let mock = Arc::new(MockCollaborator::new());
    mock.push_correction(Ok(CorrectionSet {
        html: vec![Correction::changed(
            1,
            "<p>hi</p>",
            "<p>Hi</p>",
            "Capitalize",
        )],
        css: vec![],
    }));
    let handle = scripted(mock.clone());

    let (tx, mut rx) = mpsc::channel(8);
    let mut state = AppState::with_content("<p>hi</p>", "");

    process_message(&mut state, Message::RequestCorrection, &tx, &handle);
    assert_eq!(state.correction.phase, CorrectionPhase::Requesting);

    // The spawned task sends exactly one completion message
    let completion = rx.recv().await.expect("completion message");
    process_message(&mut state, completion, &tx, &handle);
    assert_eq!(state.correction.phase, CorrectionPhase::Reviewing);

    process_message(&mut state, Message::AcceptCorrection, &tx, &handle);
    assert_eq!(state.html.to_text(), "<p>Hi</p>");
    assert_eq!(state.css.to_text(), "");
    assert_eq!(state.correction.phase, CorrectionPhase::Editing);

    // The mock received exactly the submitted sources
    assert_eq!(
        mock.correction_requests(),
        vec![("<p>hi</p>".to_string(), "".to_string())]
    );
}

#[tokio::test]
async fn edit_again_discards_without_touching_buffers() {
    let mock = Arc::new(MockCollaborator::new());
    mock.push_correction(Ok(CorrectionSet {
        html: vec![Correction::changed(1, "<p>hi</p>", "<p>Hi</p>", "caps")],
        css: vec![Correction::unchanged(1, "p { }")],
    }));
    let handle = scripted(mock);

    let (tx, mut rx) = mpsc::channel(8);
    let mut state = AppState::with_content("<p>hi</p>", "p { }");

    process_message(&mut state, Message::RequestCorrection, &tx, &handle);
    let completion = rx.recv().await.expect("completion message");
    process_message(&mut state, completion, &tx, &handle);

    process_message(&mut state, Message::EditAgain, &tx, &handle);
    assert_eq!(state.html.to_text(), "<p>hi</p>");
    assert_eq!(state.css.to_text(), "p { }");
    assert!(state.correction.set.is_none());
}

#[tokio::test]
async fn collaborator_failure_returns_to_editing_with_verbatim_message() {
    let mock = Arc::new(MockCollaborator::new());
    mock.push_correction(Err(Error::collaborator("429: rate limited")));
    let handle = scripted(mock);

    let (tx, mut rx) = mpsc::channel(8);
    let mut state = AppState::with_content("<p>hi</p>", "");

    process_message(&mut state, Message::RequestCorrection, &tx, &handle);
    let completion = rx.recv().await.expect("completion message");
    process_message(&mut state, completion, &tx, &handle);

    assert_eq!(state.correction.phase, CorrectionPhase::Editing);
    assert_eq!(state.correction.error.as_deref(), Some("429: rate limited"));
    // Still interactive: a new request can be issued
    process_message(&mut state, Message::RequestCorrection, &tx, &handle);
    assert_eq!(state.correction.phase, CorrectionPhase::Requesting);
}

#[tokio::test]
async fn unexpected_response_surfaces_as_warning() {
    let mock = Arc::new(MockCollaborator::new());
    mock.push_correction(Err(Error::unexpected_response("missing 'css' array")));
    let handle = scripted(mock);

    let (tx, mut rx) = mpsc::channel(8);
    let mut state = AppState::with_content("<p>hi</p>", "");

    process_message(&mut state, Message::RequestCorrection, &tx, &handle);
    let completion = rx.recv().await.expect("completion message");
    process_message(&mut state, completion, &tx, &handle);

    assert_eq!(state.correction.phase, CorrectionPhase::Editing);
    assert!(state
        .correction
        .error
        .as_deref()
        .unwrap()
        .contains("Unexpected response"));
    assert!(state.correction.set.is_none());
}

#[tokio::test]
async fn chat_round_trip_fills_the_popup() {
    let mock = Arc::new(MockCollaborator::new());
    mock.push_answer(Ok("Use **semantic** tags:\n- header\n- main".to_string()));
    let handle = scripted(mock.clone());

    let (tx, mut rx) = mpsc::channel(8);
    let mut state = AppState::with_content("<div>x</div>", "");
    state.chat.input = "how do I structure this?".to_string();

    process_message(&mut state, Message::SubmitChat, &tx, &handle);
    assert_eq!(state.chat.phase, ChatPhase::Pending);
    assert!(state.chat.popup_visible);
    assert!(state.chat.input.is_empty());

    let completion = rx.recv().await.expect("completion message");
    process_message(&mut state, completion, &tx, &handle);

    assert_eq!(state.chat.phase, ChatPhase::Idle);
    assert!(state.chat.response.as_deref().unwrap().contains("semantic"));
    assert_eq!(mock.questions(), vec!["how do I structure this?".to_string()]);

    // Dismiss hides, re-show restores, the stored answer survives
    process_message(&mut state, Message::DismissChatResponse, &tx, &handle);
    assert!(!state.chat.popup_visible);
    process_message(&mut state, Message::ShowChatResponse, &tx, &handle);
    assert!(state.chat.popup_visible);
}

#[tokio::test]
async fn overlapping_chat_and_correction_requests_stay_independent() {
    let mock = Arc::new(MockCollaborator::new());
    mock.push_correction(Ok(CorrectionSet {
        html: vec![Correction::unchanged(1, "<p>hi</p>")],
        css: vec![],
    }));
    mock.push_answer(Ok("fine".to_string()));
    let handle = scripted(mock);

    let (tx, mut rx) = mpsc::channel(8);
    let mut state = AppState::with_content("<p>hi</p>", "");
    state.chat.input = "ok?".to_string();

    // Both in flight at once
    process_message(&mut state, Message::RequestCorrection, &tx, &handle);
    process_message(&mut state, Message::SubmitChat, &tx, &handle);
    assert_eq!(state.correction.phase, CorrectionPhase::Requesting);
    assert_eq!(state.chat.phase, ChatPhase::Pending);

    // Apply both completions in whatever order they arrive
    let first = rx.recv().await.expect("first completion");
    let second = rx.recv().await.expect("second completion");
    process_message(&mut state, first, &tx, &handle);
    process_message(&mut state, second, &tx, &handle);

    assert_eq!(state.correction.phase, CorrectionPhase::Reviewing);
    assert_eq!(state.chat.phase, ChatPhase::Idle);
    assert_eq!(state.chat.response.as_deref(), Some("fine"));
}
