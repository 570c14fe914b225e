//! Main render/view function (View in TEA pattern)

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use ratatui::Frame;
use tagmend_app::state::{AppState, Focus};

use crate::layout::ScreenAreas;
use crate::widgets::{
    ActivityLogView, ChatBox, ChatPopup, DiffView, EditorPane, Header, PreviewPanel,
};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state. The areas
/// are computed once per loop iteration and shared with mouse hit-testing.
pub fn view(frame: &mut Frame, state: &AppState, areas: &ScreenAreas) {
    let header = Header::new(
        state.correction.is_requesting(),
        state.correction.is_reviewing(),
        state.correction.error.as_deref(),
    );
    frame.render_widget(header, areas.header);

    // Code panes: the diff replaces the editors while a set is under review
    if let Some(set) = &state.correction.set {
        frame.render_widget(DiffView::new("HTML", &set.html), areas.html_pane);
        frame.render_widget(DiffView::new("CSS", &set.css), areas.css_pane);
    } else {
        frame.render_widget(
            EditorPane::new("HTML", &state.html).focused(state.focus == Focus::HtmlEditor),
            areas.html_pane,
        );
        frame.render_widget(
            EditorPane::new("CSS", &state.css).focused(state.focus == Focus::CssEditor),
            areas.css_pane,
        );
    }

    render_divider(frame, state, areas);

    if !state.preview_panel.fullscreen {
        frame.render_widget(
            PreviewPanel::new(&state.html.to_text(), &state.css.to_text())
                .expanded(state.preview_panel.effective_expanded())
                .pinned(state.preview_panel.pinned),
            areas.preview,
        );
    }

    frame.render_widget(ActivityLogView::new(&state.activity), areas.log);

    frame.render_widget(
        ChatBox::new(&state.chat.input)
            .pending(state.chat.is_pending())
            .focused(state.focus == Focus::ChatInput),
        areas.chat,
    );

    // Overlays, innermost last
    if state.preview_panel.fullscreen {
        frame.render_widget(
            PreviewPanel::new(&state.html.to_text(), &state.css.to_text()).fullscreen(true),
            areas.preview,
        );
    }

    if state.chat.popup_visible {
        frame.render_widget(
            ChatPopup::new(state.chat.response.as_deref())
                .error(state.chat.response_is_error)
                .pending(state.chat.is_pending()),
            frame.area(),
        );
    }
}

fn render_divider(frame: &mut Frame, state: &AppState, areas: &ScreenAreas) {
    let style = if state.split.is_dragging() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let lines: Vec<Line> = (0..areas.divider.height)
        .map(|_| Line::from("\u{2502}"))
        .collect();
    Paragraph::new(lines).style(style).render(areas.divider, frame.buffer_mut());
}
