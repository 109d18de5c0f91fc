use crate::tmdb::Movie;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, RATING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

const NOT_AVAILABLE: &str = "N/A";

/// One movie rendered as a two-line list entry: title, then
/// rating • language • year.
pub struct MovieCard<'a> {
    movie: &'a Movie,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    pub fn rating(&self) -> String {
        self.movie
            .vote_average
            .map(|vote| format!("{:.1}", vote))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn language(&self) -> &str {
        self.movie
            .original_language
            .as_deref()
            .filter(|lang| !lang.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn year(&self) -> &str {
        self.movie.release_year().unwrap_or(NOT_AVAILABLE)
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let title = if self.movie.title.is_empty() {
            "Untitled".to_string()
        } else {
            self.movie.title.clone()
        };
        let muted = Style::default().fg(MUTED_TEXT);

        vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("★ ", Style::default().fg(RATING)),
                Span::styled(self.rating(), Style::default().fg(HEADER_TEXT)),
                Span::styled(" • ", muted),
                Span::styled(self.language().to_string(), muted),
                Span::styled(" • ", muted),
                Span::styled(self.year().to_string(), muted),
            ]),
        ]
    }

    pub fn item(&self) -> ListItem<'static> {
        ListItem::new(self.lines())
    }
}
