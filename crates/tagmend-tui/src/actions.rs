//! Message processing and background task dispatch
//!
//! `process_message` runs the TEA update cycle (including follow-up
//! messages) and spawns collaborator tasks. Every spawned task sends
//! exactly one completion message back through the channel, so a
//! `Requesting`/`Pending` phase always resolves even on failure.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use tagmend_app::handler::{update, Task, UpdateAction};
use tagmend_app::message::Message;
use tagmend_app::state::AppState;
use tagmend_client::Collaborator;

/// The collaborator, or the configuration error that prevented building it
/// (missing credential). The error is reported when a workflow first fires,
/// without attempting a request.
pub type CollaboratorHandle = std::result::Result<Arc<dyn Collaborator>, String>;

/// Process a single message through the TEA update cycle, following any
/// chained messages and dispatching spawned tasks.
pub fn process_message(
    state: &mut AppState,
    msg: Message,
    msg_tx: &mpsc::Sender<Message>,
    collaborator: &CollaboratorHandle,
) {
    let mut current = Some(msg);
    while let Some(msg) = current.take() {
        let result = update(state, msg);
        current = result.message;
        if let Some(UpdateAction::SpawnTask(task)) = result.action {
            spawn_task(task, msg_tx.clone(), collaborator.clone());
        }
    }
}

fn spawn_task(task: Task, tx: mpsc::Sender<Message>, collaborator: CollaboratorHandle) {
    tokio::spawn(async move {
        let completion = match task {
            Task::RequestCorrection { html, css } => match &collaborator {
                Ok(client) => match client.request_corrections(&html, &css).await {
                    Ok(set) => Message::CorrectionSucceeded { set },
                    Err(e) => Message::CorrectionFailed {
                        message: e.to_string(),
                    },
                },
                Err(config_error) => Message::CorrectionFailed {
                    message: config_error.clone(),
                },
            },
            Task::AskQuestion {
                html,
                css,
                question,
            } => match &collaborator {
                Ok(client) => match client.ask(&html, &css, &question).await {
                    Ok(answer) => Message::ChatSucceeded { answer },
                    Err(e) => Message::ChatFailed {
                        message: e.to_string(),
                    },
                },
                Err(config_error) => Message::ChatFailed {
                    message: config_error.clone(),
                },
            },
        };

        if tx.send(completion).await.is_err() {
            warn!("message channel closed before task completion");
        }
    });
}
