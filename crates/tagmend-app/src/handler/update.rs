//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::panels::PanelKind;
use crate::state::AppState;

use super::{chat, correction, editing, keys, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Editing Messages
        // ─────────────────────────────────────────────────────────
        Message::InsertChar(c) => editing::handle_insert_char(state, c),
        Message::InsertNewline => editing::handle_insert_newline(state),
        Message::Backspace => editing::handle_backspace(state),
        Message::Delete => editing::handle_delete(state),
        Message::CursorLeft => editing::handle_cursor(state, |b| b.move_left()),
        Message::CursorRight => editing::handle_cursor(state, |b| b.move_right()),
        Message::CursorUp => editing::handle_cursor(state, |b| b.move_up()),
        Message::CursorDown => editing::handle_cursor(state, |b| b.move_down()),
        Message::CursorHome => editing::handle_cursor(state, |b| b.move_home()),
        Message::CursorEnd => editing::handle_cursor(state, |b| b.move_end()),

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Correction Workflow
        // ─────────────────────────────────────────────────────────
        Message::RequestCorrection => correction::handle_request(state),
        Message::CorrectionSucceeded { set } => correction::handle_succeeded(state, set),
        Message::CorrectionFailed { message } => correction::handle_failed(state, message),
        Message::AcceptCorrection => correction::handle_accept(state),
        Message::EditAgain => correction::handle_edit_again(state),

        // ─────────────────────────────────────────────────────────
        // Chat Workflow
        // ─────────────────────────────────────────────────────────
        Message::SubmitChat => chat::handle_submit(state),
        Message::ChatSucceeded { answer } => chat::handle_succeeded(state, answer),
        Message::ChatFailed { message } => chat::handle_failed(state, message),
        Message::DismissChatResponse => chat::handle_dismiss(state),
        Message::ShowChatResponse => chat::handle_show(state),

        // ─────────────────────────────────────────────────────────
        // Panel Expansion
        // ─────────────────────────────────────────────────────────
        Message::HoverEnter(panel) => {
            panel_mut(state, panel).hover_enter();
            UpdateResult::none()
        }
        Message::HoverLeave(panel) => {
            panel_mut(state, panel).hover_leave();
            UpdateResult::none()
        }
        Message::TogglePreviewPin => {
            state.preview_panel.toggle_pin();
            UpdateResult::none()
        }
        Message::TogglePreviewFullscreen => {
            state.preview_panel.toggle_fullscreen();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Split-Pane Resizer
        // ─────────────────────────────────────────────────────────
        Message::SplitDragStarted => {
            state.split.begin_drag();
            UpdateResult::none()
        }
        Message::SplitDragMoved {
            pointer_x,
            container_left,
            container_width,
        } => {
            state.split.on_pointer_move(
                pointer_x as f64,
                container_left as f64,
                container_width as f64,
            );
            UpdateResult::none()
        }
        Message::SplitDragEnded => {
            state.split.end_drag();
            UpdateResult::none()
        }
    }
}

fn panel_mut(state: &mut AppState, kind: PanelKind) -> &mut crate::panels::PanelState {
    match kind {
        PanelKind::Preview => &mut state.preview_panel,
        PanelKind::Log => &mut state.log_panel,
    }
}
