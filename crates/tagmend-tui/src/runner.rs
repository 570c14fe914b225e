//! Main TUI runner - entry point and event loop
//!
//! The loop drains the message channel (background task completions),
//! draws, then polls terminal events. The layout is computed once per
//! iteration and shared between rendering and mouse hit-testing.

use std::sync::Arc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use tagmend_app::config::Settings;
use tagmend_app::message::Message;
use tagmend_app::state::AppState;
use tagmend_client::{Collaborator, HttpCollaborator};
use tagmend_core::prelude::*;

use crate::actions::{self, CollaboratorHandle};
use crate::{event, layout, render, terminal};

/// Run the TUI application with initial buffer contents.
pub async fn run(initial_html: String, initial_css: String, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Build the collaborator once. A missing credential is held as a
    // configuration error and reported when a workflow first fires.
    let collaborator: CollaboratorHandle = match HttpCollaborator::from_env(
        settings.collaborator.model.clone(),
        settings.collaborator.base_url.clone(),
    ) {
        Ok(client) => Ok(Arc::new(client) as Arc<dyn Collaborator>),
        Err(e) => {
            warn!("collaborator unavailable: {e}");
            Err(e.to_string())
        }
    };

    // Initialize terminal with mouse capture (hover + divider drag)
    let mut term = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let mut state = AppState::with_content(&initial_html, &initial_css);
    state.record("tagmend started");

    // Unified message channel for background task completions
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &collaborator);

    // Restore terminal
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    collaborator: &CollaboratorHandle,
) -> Result<()> {
    while !state.should_quit {
        // Process background task completions (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            actions::process_message(state, msg, &msg_tx, collaborator);
        }

        // One layout per iteration, shared by render and hit-testing
        let size = terminal.size()?;
        let areas = layout::compute_for(state, Rect::new(0, 0, size.width, size.height));

        // Render
        terminal.draw(|frame| render::view(frame, state, &areas))?;

        // Handle terminal events
        for msg in event::poll(&areas)? {
            actions::process_message(state, msg, &msg_tx, collaborator);
        }
    }

    Ok(())
}
