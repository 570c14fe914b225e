//! Panel expansion controllers
//!
//! Each side panel (preview, log) carries a hover/pin/fullscreen tri-state.
//! The log panel only supports hover; the preview panel adds pin and
//! fullscreen. Expansion is derived (`hover_expanded || pinned`), never
//! stored, so the flags cannot drift.

/// Which side panel a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Preview,
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub hover_expanded: bool,
    pub pinned: bool,
    pub fullscreen: bool,
    can_pin: bool,
    can_fullscreen: bool,
}

impl PanelState {
    /// The preview panel: hover + pin + fullscreen.
    pub fn preview() -> Self {
        Self {
            hover_expanded: false,
            pinned: false,
            fullscreen: false,
            can_pin: true,
            can_fullscreen: true,
        }
    }

    /// The log panel: hover only.
    pub fn log() -> Self {
        Self {
            hover_expanded: false,
            pinned: false,
            fullscreen: false,
            can_pin: false,
            can_fullscreen: false,
        }
    }

    /// Hover has no effect while pinned or fullscreen.
    pub fn hover_enter(&mut self) {
        if self.pinned || self.fullscreen {
            return;
        }
        self.hover_expanded = true;
    }

    pub fn hover_leave(&mut self) {
        if self.pinned || self.fullscreen {
            return;
        }
        self.hover_expanded = false;
    }

    /// Flip the pin. Unpinning forces `hover_expanded` off so the panel
    /// cannot flash stale-expanded under a pointer that has long moved away.
    pub fn toggle_pin(&mut self) {
        if !self.can_pin {
            return;
        }
        self.pinned = !self.pinned;
        if !self.pinned {
            self.hover_expanded = false;
        }
    }

    /// Flip fullscreen. Exiting forces `hover_expanded` off, same as unpin.
    pub fn toggle_fullscreen(&mut self) {
        if !self.can_fullscreen {
            return;
        }
        self.fullscreen = !self.fullscreen;
        if !self.fullscreen {
            self.hover_expanded = false;
        }
    }

    /// Computed, not stored: expanded while hovered or pinned.
    pub fn effective_expanded(&self) -> bool {
        self.hover_expanded || self.pinned
    }
}
