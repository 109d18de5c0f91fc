use crate::ui::theme::{ACCENT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled(self.glyph(), Style::default().fg(ACCENT)),
            Span::styled(" Loading movies...", Style::default().fg(MUTED_TEXT)),
        ]))
    }
}
