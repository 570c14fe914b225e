//! Reusable UI components

pub mod activity_log;
pub mod chat_box;
pub mod chat_popup;
pub mod diff_view;
pub mod editor_pane;
pub mod header;
pub mod preview_panel;

pub use activity_log::ActivityLogView;
pub use chat_box::ChatBox;
pub use chat_popup::ChatPopup;
pub use diff_view::DiffView;
pub use editor_pane::EditorPane;
pub use header::Header;
pub use preview_panel::PreviewPanel;
