//! Message types for the application (TEA pattern)

use tagmend_core::CorrectionSet;

use crate::input_key::InputKey;
use crate::panels::PanelKind;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Editing Messages (routed to the focused input target)
    // ─────────────────────────────────────────────────────────
    InsertChar(char),
    InsertNewline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    FocusNext,
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Correction Workflow
    // ─────────────────────────────────────────────────────────
    /// Request a correction set for the current buffers
    RequestCorrection,
    /// Collaborator returned a well-formed correction set
    CorrectionSucceeded { set: CorrectionSet },
    /// Collaborator call failed (any of the four workflow errors)
    CorrectionFailed { message: String },
    /// Reduce the reviewed set into the code buffers
    AcceptCorrection,
    /// Discard the reviewed set without touching the buffers
    EditAgain,

    // ─────────────────────────────────────────────────────────
    // Chat Workflow
    // ─────────────────────────────────────────────────────────
    /// Submit the chat input as a query
    SubmitChat,
    /// Collaborator returned an answer
    ChatSucceeded { answer: String },
    /// Collaborator call failed
    ChatFailed { message: String },
    /// Hide the response popup (stored response is kept)
    DismissChatResponse,
    /// Re-show the stored response, if any
    ShowChatResponse,

    // ─────────────────────────────────────────────────────────
    // Panel Expansion
    // ─────────────────────────────────────────────────────────
    HoverEnter(PanelKind),
    HoverLeave(PanelKind),
    TogglePreviewPin,
    TogglePreviewFullscreen,

    // ─────────────────────────────────────────────────────────
    // Split-Pane Resizer
    // ─────────────────────────────────────────────────────────
    /// Pointer pressed on the divider
    SplitDragStarted,
    /// Pointer moved during a drag session (columns, from the TUI layout)
    SplitDragMoved {
        pointer_x: u16,
        container_left: u16,
        container_width: u16,
    },
    /// Pointer released anywhere (document-wide listener)
    SplitDragEnded,
}
