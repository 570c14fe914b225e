//! Code editor pane widget
//!
//! Renders one code buffer with a line-number gutter and, when the pane has
//! focus, a block cursor. Scrolling follows the cursor vertically.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tagmend_app::CodeBuffer;

pub struct EditorPane<'a> {
    title: &'a str,
    buffer: &'a CodeBuffer,
    focused: bool,
}

impl<'a> EditorPane<'a> {
    pub fn new(title: &'a str, buffer: &'a CodeBuffer) -> Self {
        Self {
            title,
            buffer,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn build_line(&self, row: usize, text: &str) -> Line<'static> {
        let gutter = Span::styled(
            format!("{:>3} ", row + 1),
            Style::default().fg(Color::DarkGray),
        );

        let mut spans = vec![gutter];
        if self.focused && row == self.buffer.cursor_row {
            let col = self.buffer.cursor_col;
            let before: String = text.chars().take(col).collect();
            let at: String = text.chars().skip(col).take(1).collect();
            let after: String = text.chars().skip(col + 1).collect();

            spans.push(Span::raw(before));
            let cursor_char = if at.is_empty() { " ".to_string() } else { at };
            spans.push(Span::styled(
                cursor_char,
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(text.to_string()));
        }
        Line::from(spans)
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Keep the cursor row visible
        let visible = inner.height as usize;
        let offset = self.buffer.cursor_row.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = self
            .buffer
            .lines()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(row, text)| self.build_line(row, text))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
