//! Correction diff widget
//!
//! Renders a correction sequence as a per-line diff: flagged lines become a
//! removed/added row pair with the explanation below, untouched lines a
//! single dim row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tagmend_core::Correction;

pub struct DiffView<'a> {
    title: &'a str,
    corrections: &'a [Correction],
}

impl<'a> DiffView<'a> {
    pub fn new(title: &'a str, corrections: &'a [Correction]) -> Self {
        Self { title, corrections }
    }
}

/// Build the display rows for a correction sequence.
pub fn diff_rows(corrections: &[Correction]) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    for c in corrections {
        if c.is_error {
            rows.push(Line::from(Span::styled(
                format!("- {}", c.original),
                Style::default().fg(Color::Red),
            )));
            rows.push(Line::from(Span::styled(
                format!("+ {}", c.corrected),
                Style::default().fg(Color::Green),
            )));
            if !c.explanation.is_empty() {
                rows.push(Line::from(Span::styled(
                    format!("    {}", c.explanation),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        } else {
            rows.push(Line::from(Span::styled(
                format!("  {}", c.original),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    if rows.is_empty() {
        rows.push(Line::from(Span::styled(
            "  (empty file)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    rows
}

impl Widget for DiffView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let flagged = self.corrections.iter().filter(|c| c.is_error).count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} review ({} flagged) ", self.title, flagged));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(diff_rows(self.corrections)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_line_is_one_row() {
        let rows = diff_rows(&[Correction::unchanged(1, "<p>ok</p>")]);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_flagged_line_is_removed_added_explanation() {
        let rows = diff_rows(&[Correction::changed(1, "<p>hi", "<p>hi</p>", "Unclosed tag")]);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].spans[0].content.starts_with("- "));
        assert!(rows[1].spans[0].content.starts_with("+ "));
        assert!(rows[2].spans[0].content.contains("Unclosed tag"));
    }

    #[test]
    fn test_flagged_without_explanation_is_two_rows() {
        let mut c = Correction::changed(1, "a", "b", "");
        c.explanation.clear();
        let rows = diff_rows(&[c]);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_empty_sequence_shows_placeholder() {
        let rows = diff_rows(&[]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].spans[0].content.contains("empty"));
    }

    #[test]
    fn test_removed_red_added_green() {
        let rows = diff_rows(&[Correction::changed(1, "a", "b", "x")]);
        assert_eq!(rows[0].spans[0].style.fg, Some(Color::Red));
        assert_eq!(rows[1].spans[0].style.fg, Some(Color::Green));
    }
}
