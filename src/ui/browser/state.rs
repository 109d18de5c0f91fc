use crate::tmdb::Movie;
use crate::ui::mvi::UiState;

/// Everything the browser screen shows.
///
/// `is_loading` is true only while a fetch is outstanding. `error_message`
/// is non-empty only after a failed or rejected fetch. `movies` holds the
/// last successful result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowserState {
    pub search_term: String,
    pub error_message: String,
    pub movies: Vec<Movie>,
    pub is_loading: bool,
}

impl UiState for BrowserState {}

impl BrowserState {
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Movies whose title contains the search term, ignoring case.
    /// An empty or blank term matches everything.
    pub fn visible_movies(&self) -> Vec<&Movie> {
        let needle = self.search_term.trim().to_lowercase();
        if needle.is_empty() {
            return self.movies.iter().collect();
        }
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }
}
