//! Live preview side panel
//!
//! Collapsed: a thin vertical label strip. Expanded: the flattened text
//! rendering of the markup. Fullscreen: the full composed document source
//! (style scoped into the head, markup in the body, scripts stripped).
//! The composition itself lives in `tagmend_core::document`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use tagmend_core::{compose_document, flatten_markup};

const STRIP_LABEL: &str = "PREVIEW";

pub struct PreviewPanel<'a> {
    html: &'a str,
    css: &'a str,
    expanded: bool,
    pinned: bool,
    fullscreen: bool,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(html: &'a str, css: &'a str) -> Self {
        Self {
            html,
            css,
            expanded: false,
            pinned: false,
            fullscreen: false,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    fn render_strip(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = STRIP_LABEL
            .chars()
            .map(|c| Line::from(c.to_string()).centered())
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_expanded(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pinned {
            " Preview (pinned) "
        } else {
            " Preview "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(flatten_markup(self.html))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_fullscreen(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Document (fullscreen) ")
            .title_bottom(" Esc exit ");
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(compose_document(self.html, self.css))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

impl Widget for PreviewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.fullscreen {
            self.render_fullscreen(area, buf);
        } else if self.expanded {
            self.render_expanded(area, buf);
        } else {
            self.render_strip(area, buf);
        }
    }
}
