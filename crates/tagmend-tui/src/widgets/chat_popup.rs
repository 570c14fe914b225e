//! Chat response popup
//!
//! Centered, dismissible popup over the main UI. Answers get lightweight
//! markup at render time only: `**bold**` spans and `- ` bullet lists.
//! Failures render with a red border and are never confused with the
//! correction banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct ChatPopup<'a> {
    response: Option<&'a str>,
    is_error: bool,
    pending: bool,
}

impl<'a> ChatPopup<'a> {
    pub fn new(response: Option<&'a str>) -> Self {
        Self {
            response,
            is_error: false,
            pending: false,
        }
    }

    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

/// Interpret lightweight markup: `**bold**` spans, `- ` bullets.
/// This happens at render time only; the stored response stays plain text.
pub fn markup_lines(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|raw| {
            let (prefix, rest) = match raw.strip_prefix("- ") {
                Some(rest) => (
                    Some(Span::styled("• ", Style::default().fg(Color::Yellow))),
                    rest,
                ),
                None => (None, raw),
            };

            let mut spans: Vec<Span<'static>> = Vec::new();
            if let Some(p) = prefix {
                spans.push(p);
            }
            for (i, chunk) in rest.split("**").enumerate() {
                if chunk.is_empty() {
                    continue;
                }
                if i % 2 == 1 {
                    spans.push(Span::styled(
                        chunk.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                } else {
                    spans.push(Span::raw(chunk.to_string()));
                }
            }
            Line::from(spans)
        })
        .collect()
}

impl Widget for ChatPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (area.width * 3 / 5).clamp(20, area.width);
        let height = (area.height * 2 / 5).clamp(5, area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);

        let border_style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Answer ")
            .title_bottom(" Esc dismiss ");
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let lines = if self.pending {
            vec![Line::from(Span::styled(
                "Thinking...",
                Style::default().fg(Color::Yellow),
            ))]
        } else {
            markup_lines(self.response.unwrap_or(""))
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_spans_toggle() {
        let lines = markup_lines("a **b** c");
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_bullets_get_a_dot() {
        let lines = markup_lines("- first\n- second");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content.as_ref(), "• ");
        assert_eq!(lines[0].spans[1].content.as_ref(), "first");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let lines = markup_lines("hello world");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content.as_ref(), "hello world");
    }

    #[test]
    fn test_render_centers_popup() {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        ChatPopup::new(Some("hi")).render(area, &mut buf);

        // The popup is 60x12 centered at (20, 9); its top-left border cell
        // must be drawn, the far corner untouched.
        assert_ne!(buf[(20, 9)].symbol(), " ");
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
