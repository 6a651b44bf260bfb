//! Global CLI options shared across all commands
//!
//! Collects the global flags once so command handlers take a single
//! argument instead of threading each flag through.

use crate::cli::{Cli, OutputFormat};
use crate::config::StorageKind;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.tokenauth/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Token storage directory override
    pub data_dir: Option<String>,

    /// Token storage backend override
    pub storage: Option<StorageKind>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            data_dir: cli.data_dir.clone(),
            storage: cli.storage,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Get data directory override as `Option<&str>`.
    pub fn data_dir_ref(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_copies_flags() {
        let cli = Cli::parse_from([
            "tokenauth",
            "--format",
            "json",
            "--config",
            "/custom/config.yaml",
            "--api-url",
            "http://localhost:9000",
            "--data-dir",
            "/tmp/tokenauth",
            "--storage",
            "none",
            "status",
        ]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.config_ref(), Some("/custom/config.yaml"));
        assert_eq!(opts.api_url_ref(), Some("http://localhost:9000"));
        assert_eq!(opts.data_dir_ref(), Some("/tmp/tokenauth"));
        assert_eq!(opts.storage, Some(StorageKind::None));
    }

    #[test]
    fn test_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Pretty,
            config: None,
            api_url: None,
            data_dir: None,
            storage: None,
        };

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.api_url_ref(), None);
        assert_eq!(opts.data_dir_ref(), None);
    }
}
