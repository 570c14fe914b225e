//! tagmend-tui - Terminal UI for tagmend
//!
//! This crate provides the ratatui-based terminal interface on top of
//! `tagmend-app`: layout calculation, event polling (keys and mouse),
//! widget rendering, and the main event loop with background collaborator
//! task dispatch.

pub mod actions;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
