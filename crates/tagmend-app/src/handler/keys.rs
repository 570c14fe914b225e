//! Key event handlers routed by focus and workflow phase

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus and phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit always works
    if let InputKey::CharCtrl('c') | InputKey::CharCtrl('q') = key {
        return Some(Message::Quit);
    }

    // Review keys apply while an editor has focus; the chat stays usable
    // during review (the workflows are independent).
    if state.correction.is_reviewing() && state.focus != Focus::ChatInput {
        return handle_key_reviewing(key);
    }

    match key {
        // ─────────────────────────────────────────────────────────
        // Workflow Triggers
        // ─────────────────────────────────────────────────────────
        InputKey::CharCtrl('r') => Some(Message::RequestCorrection),
        InputKey::CharCtrl('p') => Some(Message::TogglePreviewPin),
        InputKey::CharCtrl('f') => Some(Message::TogglePreviewFullscreen),
        InputKey::CharCtrl('o') => Some(Message::ShowChatResponse),

        // Esc closes overlays innermost-first
        InputKey::Esc => {
            if state.preview_panel.fullscreen {
                Some(Message::TogglePreviewFullscreen)
            } else if state.chat.popup_visible {
                Some(Message::DismissChatResponse)
            } else {
                None
            }
        }

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),

        // ─────────────────────────────────────────────────────────
        // Editing (routed by focus in the update path)
        // ─────────────────────────────────────────────────────────
        InputKey::Enter => {
            if state.focus == Focus::ChatInput {
                Some(Message::SubmitChat)
            } else {
                Some(Message::InsertNewline)
            }
        }
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Backspace => Some(Message::Backspace),
        InputKey::Delete => Some(Message::Delete),
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Home => Some(Message::CursorHome),
        InputKey::End => Some(Message::CursorEnd),

        _ => None,
    }
}

/// While reviewing a diff the editors are read-only: plain keys become
/// accept/reject commands.
fn handle_key_reviewing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('a') => Some(Message::AcceptCorrection),
        InputKey::Esc | InputKey::Char('e') => Some(Message::EditAgain),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CorrectionPhase;

    #[test]
    fn test_ctrl_c_always_quits() {
        let state = AppState::new();
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));

        let mut reviewing = AppState::new();
        reviewing.correction.phase = CorrectionPhase::Reviewing;
        assert!(matches!(
            handle_key(&reviewing, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }

    #[test]
    fn test_reviewing_keys() {
        let mut state = AppState::new();
        state.correction.phase = CorrectionPhase::Reviewing;

        assert!(matches!(
            handle_key(&state, InputKey::Char('a')),
            Some(Message::AcceptCorrection)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::AcceptCorrection)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Char('e')),
            Some(Message::EditAgain)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::EditAgain)
        ));
        // Plain typing does nothing while reviewing
        assert!(handle_key(&state, InputKey::Char('x')).is_none());
    }

    #[test]
    fn test_chat_stays_usable_while_reviewing() {
        let mut state = AppState::new();
        state.correction.phase = CorrectionPhase::Reviewing;
        state.focus = Focus::ChatInput;

        assert!(matches!(
            handle_key(&state, InputKey::Char('x')),
            Some(Message::InsertChar('x'))
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::SubmitChat)
        ));
    }

    #[test]
    fn test_enter_submits_in_chat_focus() {
        let mut state = AppState::new();
        state.focus = Focus::ChatInput;
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::SubmitChat)
        ));

        state.focus = Focus::HtmlEditor;
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::InsertNewline)
        ));
    }

    #[test]
    fn test_esc_exits_fullscreen_before_dismissing_popup() {
        let mut state = AppState::new();
        state.preview_panel.toggle_fullscreen();
        state.chat.popup_visible = true;
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::TogglePreviewFullscreen)
        ));

        state.preview_panel.toggle_fullscreen();
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::DismissChatResponse)
        ));
    }

    #[test]
    fn test_typing_becomes_insert_char() {
        let state = AppState::new();
        assert!(matches!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::InsertChar('q'))
        ));
    }
}
