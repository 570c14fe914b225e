//! Title bar widget
//!
//! Shows the application title plus either the key hints, the requesting
//! indicator, or the correction error banner. The banner lives here so the
//! chat popup can never overwrite it (the two workflows keep separate
//! error surfaces).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const KEY_HINTS: &str =
    "Tab focus | Ctrl+R review | Ctrl+P pin | Ctrl+F fullscreen | Ctrl+O answer | Ctrl+Q quit";
const REVIEW_HINTS: &str = "Enter/a accept | Esc/e edit again";

pub struct Header<'a> {
    requesting: bool,
    reviewing: bool,
    error: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(requesting: bool, reviewing: bool, error: Option<&'a str>) -> Self {
        Self {
            requesting,
            reviewing,
            error,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" tagmend ");
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if let Some(error) = self.error {
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if self.requesting {
            Line::from(Span::styled(
                "Requesting corrections...",
                Style::default().fg(Color::Yellow),
            ))
        } else if self.reviewing {
            Line::from(Span::styled(
                REVIEW_HINTS,
                Style::default().fg(Color::Cyan),
            ))
        } else {
            Line::from(Span::styled(
                KEY_HINTS,
                Style::default().fg(Color::DarkGray),
            ))
        };

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_states() {
        let idle = Header::new(false, false, None);
        assert!(!idle.requesting);
        assert!(idle.error.is_none());

        let busy = Header::new(true, false, None);
        assert!(busy.requesting);

        let failed = Header::new(false, false, Some("boom"));
        assert_eq!(failed.error, Some("boom"));
    }

    #[test]
    fn test_render_into_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));
        Header::new(false, false, Some("it broke")).render(Rect::new(0, 0, 40, 3), &mut buf);
        let content: String = (1..11)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(content.starts_with("it broke"));
    }
}
