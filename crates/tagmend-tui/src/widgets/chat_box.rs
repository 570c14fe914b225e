//! Chat input box widget
//!
//! Single-line query input. While a request is pending the box shows a
//! waiting indicator instead and the trigger is effectively disabled (the
//! workflow also discards re-submissions).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct ChatBox<'a> {
    input: &'a str,
    pending: bool,
    focused: bool,
}

impl<'a> ChatBox<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pending: false,
            focused: false,
        }
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ChatBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Ask about your code ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.pending {
            Paragraph::new(Line::from(Span::styled(
                "Waiting for answer...",
                Style::default().fg(Color::Yellow),
            )))
            .render(inner, buf);
            return;
        }

        // Keep the tail visible when the query outgrows the box
        let budget = inner.width.saturating_sub(4) as usize;
        let mut shown = self.input;
        while shown.width() > budget && !shown.is_empty() {
            let mut chars = shown.chars();
            chars.next();
            shown = chars.as_str();
        }

        let mut spans = vec![
            Span::styled(
                "? ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(shown.to_string()),
        ];
        if self.focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
