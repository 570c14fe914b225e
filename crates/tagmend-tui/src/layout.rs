//! Screen layout definitions for the TUI
//!
//! Computes the screen areas for the main UI from the split position and
//! the panel expansion states. The same areas drive both rendering and
//! mouse hit-testing, so they are computed once per loop iteration.

use ratatui::layout::{Constraint, Layout, Rect};
use tagmend_app::state::AppState;

/// Header height in rows (borders included)
pub const HEADER_HEIGHT: u16 = 3;
/// Chat box height in rows (borders included)
pub const CHAT_HEIGHT: u16 = 3;
/// Log panel height when collapsed (one visible entry)
pub const LOG_COLLAPSED_HEIGHT: u16 = 3;
/// Log panel height when hover-expanded
pub const LOG_EXPANDED_HEIGHT: u16 = 9;
/// Preview panel width when collapsed (vertical label strip)
pub const PREVIEW_COLLAPSED_WIDTH: u16 = 4;
/// Preview panel share of the main region when expanded, in percent
pub const PREVIEW_EXPANDED_PERCENT: u16 = 40;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with key hints or the correction error banner
    pub header: Rect,

    /// Shared editor container (both panes + divider); the drag container
    /// for the split resizer
    pub editors: Rect,

    /// HTML pane (left)
    pub html_pane: Rect,

    /// Draggable divider column between the panes
    pub divider: Rect,

    /// CSS pane (right)
    pub css_pane: Rect,

    /// Preview side panel (collapsed strip, expanded pane, or fullscreen)
    pub preview: Rect,

    /// Activity log panel along the bottom
    pub log: Rect,

    /// Chat input box
    pub chat: Rect,
}

/// Compute the layout from explicit parameters.
pub fn compute(
    area: Rect,
    split_percent: u16,
    preview_expanded: bool,
    log_expanded: bool,
    preview_fullscreen: bool,
) -> ScreenAreas {
    let log_height = if log_expanded {
        LOG_EXPANDED_HEIGHT
    } else {
        LOG_COLLAPSED_HEIGHT
    };

    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(log_height),
        Constraint::Length(CHAT_HEIGHT),
    ])
    .split(area);

    let preview_constraint = if preview_expanded {
        Constraint::Percentage(PREVIEW_EXPANDED_PERCENT)
    } else {
        Constraint::Length(PREVIEW_COLLAPSED_WIDTH)
    };
    let main = Layout::horizontal([Constraint::Min(10), preview_constraint]).split(rows[1]);

    let panes = Layout::horizontal([
        Constraint::Percentage(split_percent),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .split(main[0]);

    // Fullscreen is an overlay: the preview takes the whole frame, the rest
    // of the layout stays where it was.
    let preview = if preview_fullscreen { area } else { main[1] };

    ScreenAreas {
        header: rows[0],
        editors: main[0],
        html_pane: panes[0],
        divider: panes[1],
        css_pane: panes[2],
        preview,
        log: rows[2],
        chat: rows[3],
    }
}

/// Compute the layout from the application state.
pub fn compute_for(state: &AppState, area: Rect) -> ScreenAreas {
    compute(
        area,
        state.split.position().round() as u16,
        state.preview_panel.effective_expanded(),
        state.log_panel.effective_expanded(),
        state.preview_panel.fullscreen,
    )
}

/// Whether a cell position falls inside a rect.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn test_rows_tile_the_screen() {
        let areas = compute(AREA, 50, false, false, false);
        let total = areas.header.height + areas.editors.height + areas.log.height
            + areas.chat.height;
        assert_eq!(total, AREA.height);
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.chat.height, CHAT_HEIGHT);
    }

    #[test]
    fn test_divider_sits_between_the_panes() {
        let areas = compute(AREA, 50, false, false, false);
        assert_eq!(areas.divider.width, 1);
        assert_eq!(areas.html_pane.x + areas.html_pane.width, areas.divider.x);
        assert_eq!(areas.divider.x + 1, areas.css_pane.x);
    }

    #[test]
    fn test_split_percent_moves_the_divider() {
        let narrow = compute(AREA, 15, false, false, false);
        let wide = compute(AREA, 85, false, false, false);
        assert!(narrow.html_pane.width < wide.html_pane.width);
        // 15% and 85% of the editors container, within rounding
        let editors_width = narrow.editors.width as f64;
        assert!((narrow.html_pane.width as f64 - editors_width * 0.15).abs() <= 1.0);
        assert!((wide.html_pane.width as f64 - editors_width * 0.85).abs() <= 1.0);
    }

    #[test]
    fn test_collapsed_preview_is_a_strip() {
        let areas = compute(AREA, 50, false, false, false);
        assert_eq!(areas.preview.width, PREVIEW_COLLAPSED_WIDTH);
    }

    #[test]
    fn test_expanded_preview_takes_its_share() {
        let areas = compute(AREA, 50, true, false, false);
        assert!(areas.preview.width > PREVIEW_COLLAPSED_WIDTH);
        assert_eq!(areas.preview.width, AREA.width * PREVIEW_EXPANDED_PERCENT / 100);
    }

    #[test]
    fn test_expanded_log_is_taller() {
        let collapsed = compute(AREA, 50, false, false, false);
        let expanded = compute(AREA, 50, false, true, false);
        assert_eq!(collapsed.log.height, LOG_COLLAPSED_HEIGHT);
        assert_eq!(expanded.log.height, LOG_EXPANDED_HEIGHT);
        assert!(expanded.editors.height < collapsed.editors.height);
    }

    #[test]
    fn test_fullscreen_preview_covers_the_frame() {
        let areas = compute(AREA, 50, false, false, true);
        assert_eq!(areas.preview, AREA);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(10, 5, 20, 10);
        assert!(hit(rect, 10, 5));
        assert!(hit(rect, 29, 14));
        assert!(!hit(rect, 30, 5));
        assert!(!hit(rect, 10, 15));
        assert!(!hit(rect, 9, 5));
    }
}
