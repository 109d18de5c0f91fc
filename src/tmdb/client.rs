use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;

use crate::config::{ApiConfig, CredentialStatus};
use crate::tmdb::error::FetchError;
use crate::tmdb::models::{DiscoverOutcome, DiscoverResponse};

/// Popular movies, most popular first.
pub const DISCOVER_POPULAR_PATH: &str = "/discover/movie?sort_by=popularity.desc";

/// Message used when the API flags a failure without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to fetch movies.";

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    credential: CredentialStatus,
}

impl TmdbClient {
    /// Build a client from explicit API settings.
    ///
    /// The credential is resolved once here. A missing key is not an error
    /// until a request is attempted.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::with_credential(config, config.resolve_credential())
    }

    pub fn with_credential(
        config: &ApiConfig,
        credential: CredentialStatus,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            credential,
        })
    }

    pub fn discover_url(&self) -> String {
        format!("{}{}", self.base_url, DISCOVER_POPULAR_PATH)
    }

    /// Fetch the popular movies list.
    ///
    /// Non-success statuses, network failures and undecodable bodies are
    /// errors. A body with `Response: "False"` is a [`DiscoverOutcome::Rejected`].
    pub async fn discover_popular(&self) -> Result<DiscoverOutcome, FetchError> {
        let key = match &self.credential {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(FetchError::MissingApiKey {
                    reason: reason.clone(),
                });
            }
        };

        let url = self.discover_url();
        tracing::debug!(url = %url, "Requesting popular movies");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", key.expose()))
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body: DiscoverResponse = response.json().await.map_err(FetchError::Decode)?;
        let outcome = body.into_outcome(DEFAULT_REJECTION_MESSAGE);

        match &outcome {
            DiscoverOutcome::Movies(movies) => {
                tracing::info!(count = movies.len(), "Fetched popular movies");
            }
            DiscoverOutcome::Rejected { message } => {
                tracing::warn!(message = %message, "API rejected discover request");
            }
        }

        Ok(outcome)
    }
}
