//! Configuration for the movie browser.
//!
//! Settings come from an optional TOML file, CLI overrides, and the
//! environment (for the API key only).

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
