//! Command execution context
//!
//! Loads config, selects token storage, and builds the auth client so
//! command handlers don't repeat that setup.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::HttpAuthClient;
use crate::config::Config;
use crate::error::Result;
use crate::storage::{TokenStore, select_storage};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI/env overrides applied
    pub config: Config,
    /// Auth client wired to the selected token store
    pub client: HttpAuthClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded or the HTTP client
    /// cannot be built. Storage problems are not errors; they fall back to
    /// no-op storage.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::resolve_config(opts)?;

        let tokens = TokenStore::new(select_storage(&config), config.token_key.clone());
        let client = HttpAuthClient::new(&config.api_url, tokens)?;

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Load the config file and layer the CLI/env overrides on top
    pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = Config::load_at(opts.config_ref())?;
        config.apply_overrides(opts.api_url_ref(), opts.data_dir_ref(), opts.storage);
        Ok(config)
    }

    /// The token store behind the client
    pub fn tokens(&self) -> &TokenStore {
        self.client.tokens()
    }
}
