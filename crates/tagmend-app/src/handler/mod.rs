//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers routed by focus and workflow phase
//! - `editing`: Buffer/chat-input editing handlers
//! - `correction`: Correction workflow handlers
//! - `chat`: Chat workflow handlers

pub(crate) mod chat;
pub(crate) mod correction;
pub(crate) mod editing;
pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background collaborator task
    SpawnTask(Task),
}

/// Background tasks to spawn
///
/// Each task sends exactly one completion message back through the channel,
/// so a `Requesting`/`Pending` phase always resolves.
#[derive(Debug, Clone)]
pub enum Task {
    /// Request a correction set for the two buffers
    RequestCorrection { html: String, css: String },

    /// Ask a free-text question about the two buffers
    AskQuestion {
        html: String,
        css: String,
        question: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
