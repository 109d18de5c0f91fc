//! Client for the movie metadata API.

mod client;
mod error;
mod models;

pub use client::{TmdbClient, DEFAULT_REJECTION_MESSAGE, DISCOVER_POPULAR_PATH};
pub use error::FetchError;
pub use models::{DiscoverOutcome, DiscoverResponse, Movie};
