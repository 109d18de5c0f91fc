//! Owner of the browser view state and the one fetch operation.

use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

use crate::tmdb::{DiscoverOutcome, TmdbClient};
use crate::ui::browser::{BrowserIntent, BrowserReducer, BrowserState};
use crate::ui::mvi::Reducer;

/// Shared handle to the browser state.
///
/// Cloning is cheap; the fetch task and the draw loop each hold a clone.
#[derive(Clone, Default)]
pub struct BrowserController {
    state: Arc<Mutex<BrowserState>>,
}

impl BrowserController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one reducer step under the lock.
    pub fn dispatch(&self, intent: BrowserIntent) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = BrowserReducer::reduce(current, intent);
    }

    pub fn snapshot(&self) -> BrowserState {
        self.state.lock().clone()
    }

    /// Borrow the current state without cloning the movie list.
    pub fn with_state<R>(&self, f: impl FnOnce(&BrowserState) -> R) -> R {
        f(&self.state.lock())
    }

    /// Fetch popular movies and fold the result into the state.
    ///
    /// Loading is set as soon as this is called, before the returned future
    /// is first polled. It is cleared on every exit path, including when the
    /// future is dropped before completion.
    pub fn fetch_movies(&self, client: &TmdbClient) -> impl Future<Output = ()> + Send + 'static {
        self.dispatch(BrowserIntent::FetchStarted);
        let loading = scopeguard::guard(self.clone(), |controller| {
            controller.dispatch(BrowserIntent::FetchFinished)
        });
        let client = client.clone();

        async move {
            let controller = &*loading;
            match client.discover_popular().await {
                Ok(DiscoverOutcome::Movies(movies)) => {
                    controller.dispatch(BrowserIntent::FetchSucceeded { movies });
                }
                Ok(DiscoverOutcome::Rejected { message }) => {
                    controller.dispatch(BrowserIntent::FetchRejected { message });
                }
                Err(err) => {
                    tracing::error!(kind = err.kind(), error = %err, "Error fetching movies");
                    controller.dispatch(BrowserIntent::FetchFailed);
                }
            }
        }
    }
}
