use anyhow::Context;
use clap::Parser;
use movie_finder::cli::Cli;
use movie_finder::config::CredentialStatus;
use movie_finder::logging::init_tracing;
use movie_finder::tmdb::TmdbClient;
use movie_finder::ui::runtime;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(base_url = %config.api.base_url, "Configuration loaded");

    let credential = config.api.resolve_credential();
    if let CredentialStatus::Unconfigured { reason } = &credential {
        tracing::warn!(reason = %reason, "API key missing; the movie fetch will fail");
    }
    let client = TmdbClient::with_credential(&config.api, credential)
        .context("Failed to create API client")?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime::run(&config.ui, rt.handle().clone(), client);
    rt.shutdown_timeout(Duration::from_millis(200));
    result.context("Terminal UI failed")
}
