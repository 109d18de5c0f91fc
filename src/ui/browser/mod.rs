mod intent;
mod reducer;
mod state;

pub use intent::BrowserIntent;
pub use reducer::{BrowserReducer, GENERIC_FETCH_ERROR};
pub use state::BrowserState;
