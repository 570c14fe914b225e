//! Terminal event polling
//!
//! Keys are normalized into [`InputKey`]; mouse events are translated into
//! semantic messages against the last computed layout. The release handler
//! is document-wide on purpose: a mouse-up anywhere ends a drag session,
//! tolerating fast pointer movement outside the divider.

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;
use tagmend_app::message::Message;
use tagmend_app::panels::PanelKind;
use tagmend_app::InputKey;
use tagmend_core::prelude::*;

use crate::layout::{hit, ScreenAreas};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None, // Unsupported keys ignored
    }
}

/// Translate a mouse event into semantic messages.
///
/// Hover produces an enter for the panel under the pointer and a leave for
/// the other; the handlers are idempotent, so repeats while the pointer
/// rests in one place are harmless.
pub fn translate_mouse(mouse: MouseEvent, areas: &ScreenAreas) -> Vec<Message> {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if hit(areas.divider, col, row) {
                vec![Message::SplitDragStarted]
            } else {
                vec![]
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            vec![Message::SplitDragMoved {
                pointer_x: col,
                container_left: areas.editors.x,
                container_width: areas.editors.width,
            }]
        }
        // Release anywhere ends the session, not just over the divider.
        MouseEventKind::Up(MouseButton::Left) => vec![Message::SplitDragEnded],
        MouseEventKind::Moved => {
            if hit(areas.preview, col, row) {
                vec![
                    Message::HoverEnter(PanelKind::Preview),
                    Message::HoverLeave(PanelKind::Log),
                ]
            } else if hit(areas.log, col, row) {
                vec![
                    Message::HoverEnter(PanelKind::Log),
                    Message::HoverLeave(PanelKind::Preview),
                ]
            } else {
                vec![
                    Message::HoverLeave(PanelKind::Preview),
                    Message::HoverLeave(PanelKind::Log),
                ]
            }
        }
        _ => vec![],
    }
}

/// Poll for terminal events with timeout
pub fn poll(areas: &ScreenAreas) -> Result<Vec<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    if let Some(input_key) = key_event_to_input(key) {
                        return Ok(vec![Message::Key(input_key)]);
                    }
                }
                Ok(vec![])
            }
            Event::Mouse(mouse) => Ok(translate_mouse(mouse, areas)),
            Event::Resize(_, _) => Ok(vec![Message::Tick]),
            _ => Ok(vec![]),
        }
    } else {
        // Generate tick on timeout for redraws
        Ok(vec![Message::Tick])
    }
}
