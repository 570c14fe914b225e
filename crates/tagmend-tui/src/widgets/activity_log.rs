//! Activity log panel widget
//!
//! Shows the audit trail newest-first. Collapsed the panel has room for the
//! latest entry only; hover-expanded it shows as many as fit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use tagmend_core::ActivityLog;

pub struct ActivityLogView<'a> {
    log: &'a ActivityLog,
}

impl<'a> ActivityLogView<'a> {
    pub fn new(log: &'a ActivityLog) -> Self {
        Self { log }
    }
}

impl Widget for ActivityLogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Activity ({}) ", self.log.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .log
            .entries()
            .iter()
            .take(inner.height as usize)
            .map(|e| Line::from(e.formatted()))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_entry_is_on_top() {
        let mut log = ActivityLog::new();
        log.record("older");
        log.record("newer");

        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        ActivityLogView::new(&log).render(area, &mut buf);

        let first: String = (1..39).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(first.contains("newer"));
    }

    #[test]
    fn test_title_counts_entries() {
        let mut log = ActivityLog::new();
        log.record("one");

        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        ActivityLogView::new(&log).render(area, &mut buf);

        let top: String = (0..39).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(top.contains("Activity (1)"));
    }
}
