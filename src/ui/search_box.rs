use crate::ui::theme::{ACCENT_LIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "Search through thousands of movies";

/// Controlled text input showing the current search term.
pub struct SearchBox<'a> {
    term: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(term: &'a str) -> Self {
        Self { term }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let content = if self.term.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(self.term.to_string(), Style::default().fg(HEADER_TEXT))
        };
        let line = Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(ACCENT_LIGHT)),
            content,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Cursor cell just past the last typed character, clamped inside the box.
    pub fn cursor(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width < 3 || area.height < 3 {
            return None;
        }
        let typed = (PROMPT.chars().count() + self.term.chars().count()) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(typed).min(max_x);
        Some((x, area.y + 1))
    }
}
