use crate::tmdb::Movie;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// Fetch began: raise the loading flag and clear the previous error.
    FetchStarted,
    /// Fetch returned a movie list.
    FetchSucceeded { movies: Vec<Movie> },
    /// API answered with a logical failure. Clears the movie list.
    FetchRejected { message: String },
    /// Transport or HTTP failure. Leaves the movie list as it was.
    FetchFailed,
    /// Fetch is over, whatever the outcome.
    FetchFinished,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
}

impl Intent for BrowserIntent {}
