//! Application state (Model in TEA pattern)

use tagmend_core::{ActivityLog, CorrectionSet};

use crate::buffer::CodeBuffer;
use crate::panels::PanelState;
use crate::split::SplitState;

/// Which input target keystrokes are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    HtmlEditor,
    CssEditor,
    ChatInput,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::HtmlEditor => Focus::CssEditor,
            Focus::CssEditor => Focus::ChatInput,
            Focus::ChatInput => Focus::HtmlEditor,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::HtmlEditor => Focus::ChatInput,
            Focus::CssEditor => Focus::HtmlEditor,
            Focus::ChatInput => Focus::CssEditor,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Correction Workflow State
// ─────────────────────────────────────────────────────────────────────────────

/// Correction workflow phase: `Editing → Requesting → {Reviewing | Editing}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionPhase {
    /// Buffers are editable; no request outstanding.
    #[default]
    Editing,

    /// A collaborator call is in flight. The trigger is disabled and a
    /// second request is discarded until this resolves.
    Requesting,

    /// A correction set is stored and shown as a diff for accept/reject.
    Reviewing,
}

#[derive(Debug, Clone, Default)]
pub struct CorrectionState {
    pub phase: CorrectionPhase,

    /// Present exactly while `phase == Reviewing`.
    pub set: Option<CorrectionSet>,

    /// User-visible error from the last failed or rejected request.
    /// Cleared when a new request is issued.
    pub error: Option<String>,
}

impl CorrectionState {
    pub fn is_requesting(&self) -> bool {
        self.phase == CorrectionPhase::Requesting
    }

    pub fn is_reviewing(&self) -> bool {
        self.phase == CorrectionPhase::Reviewing
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat Workflow State
// ─────────────────────────────────────────────────────────────────────────────

/// Chat workflow phase, independent of the correction workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub phase: ChatPhase,

    /// The query under composition.
    pub input: String,

    /// Last answer, kept across dismissals so the popup can be re-shown.
    /// Failures are stored with a distinct prefix.
    pub response: Option<String>,

    /// Whether the stored response is a failure (styled differently).
    pub response_is_error: bool,

    /// Popup visibility; dismissal does not clear the stored response.
    pub popup_visible: bool,
}

impl ChatState {
    pub fn is_pending(&self) -> bool {
        self.phase == ChatPhase::Pending
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// The whole session: owned by the event loop, passed `&mut` into the pure
/// update path. No ambient globals.
#[derive(Debug, Clone)]
pub struct AppState {
    pub html: CodeBuffer,
    pub css: CodeBuffer,
    pub focus: Focus,

    pub correction: CorrectionState,
    pub chat: ChatState,

    pub preview_panel: PanelState,
    pub log_panel: PanelState,
    pub split: SplitState,

    pub activity: ActivityLog,

    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            html: CodeBuffer::new(),
            css: CodeBuffer::new(),
            focus: Focus::default(),
            correction: CorrectionState::default(),
            chat: ChatState::default(),
            preview_panel: PanelState::preview(),
            log_panel: PanelState::log(),
            split: SplitState::new(),
            activity: ActivityLog::new(),
            should_quit: false,
        }
    }

    /// Start with initial buffer contents (file arguments or templates).
    pub fn with_content(html: &str, css: &str) -> Self {
        let mut state = Self::new();
        state.html.set_text(html);
        state.css.set_text(css);
        state
    }

    /// Append to the activity log (newest first).
    pub fn record(&mut self, message: impl Into<String>) {
        self.activity.record(message);
    }

    /// The buffer keystrokes are currently routed to, if an editor has
    /// focus. Editors are read-only while a correction set is under review.
    pub fn focused_buffer(&mut self) -> Option<&mut CodeBuffer> {
        if self.correction.is_reviewing() {
            return None;
        }
        match self.focus {
            Focus::HtmlEditor => Some(&mut self.html),
            Focus::CssEditor => Some(&mut self.css),
            Focus::ChatInput => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::HtmlEditor.next(), Focus::CssEditor);
        assert_eq!(Focus::CssEditor.next(), Focus::ChatInput);
        assert_eq!(Focus::ChatInput.next(), Focus::HtmlEditor);
        assert_eq!(Focus::HtmlEditor.prev(), Focus::ChatInput);
    }

    #[test]
    fn test_with_content() {
        let state = AppState::with_content("<p>hi</p>", "p { }");
        assert_eq!(state.html.to_text(), "<p>hi</p>");
        assert_eq!(state.css.to_text(), "p { }");
    }

    #[test]
    fn test_focused_buffer_follows_focus() {
        let mut state = AppState::new();
        state.focused_buffer().unwrap().insert_char('h');
        assert_eq!(state.html.to_text(), "h");

        state.focus = Focus::CssEditor;
        state.focused_buffer().unwrap().insert_char('c');
        assert_eq!(state.css.to_text(), "c");

        state.focus = Focus::ChatInput;
        assert!(state.focused_buffer().is_none());
    }

    #[test]
    fn test_buffers_read_only_while_reviewing() {
        let mut state = AppState::new();
        state.correction.phase = CorrectionPhase::Reviewing;
        assert!(state.focused_buffer().is_none());
    }
}
