use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::state::BrowserState;
use crate::ui::mvi::Reducer;

/// Shown for any transport or HTTP failure.
pub const GENERIC_FETCH_ERROR: &str = "Error fetching movies. Please try again later.";

pub struct BrowserReducer;

impl Reducer for BrowserReducer {
    type State = BrowserState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::FetchStarted => BrowserState {
                is_loading: true,
                error_message: String::new(),
                ..state
            },
            BrowserIntent::FetchSucceeded { movies } => BrowserState {
                movies,
                error_message: String::new(),
                ..state
            },
            BrowserIntent::FetchRejected { message } => BrowserState {
                movies: Vec::new(),
                error_message: message,
                ..state
            },
            // Transport failures keep whatever list was already on screen.
            BrowserIntent::FetchFailed => BrowserState {
                error_message: GENERIC_FETCH_ERROR.to_string(),
                ..state
            },
            BrowserIntent::FetchFinished => BrowserState {
                is_loading: false,
                ..state
            },
            BrowserIntent::SearchInput(ch) => {
                let mut state = state;
                state.search_term.push(ch);
                state
            }
            BrowserIntent::SearchBackspace => {
                let mut state = state;
                state.search_term.pop();
                state
            }
            BrowserIntent::SearchClear => BrowserState {
                search_term: String::new(),
                ..state
            },
        }
    }
}
