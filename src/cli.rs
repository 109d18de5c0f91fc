use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Browse popular movies in the terminal.
#[derive(Debug, Parser)]
#[command(name = "movie-finder", version, about)]
pub struct Cli {
    /// Path to config file (default: ~/.config/movie-finder/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the metadata API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read the API key from this environment variable
    #[arg(long, value_name = "NAME")]
    pub api_key_env: Option<String>,
}

impl Cli {
    /// Load the config file, then apply command line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(ref base_url) = self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(ref name) = self.api_key_env {
            config.api.api_key_env = name.clone();
        }
        config.validate()
    }
}
