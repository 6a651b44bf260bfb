//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::config::StorageKind;

pub mod args;
pub mod completions;
pub mod context;
pub mod init;
pub mod login;
pub mod logout;
pub mod page;
pub mod status;
pub mod whoami;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// tokenauth - log in to a bearer-token API and inspect the session
#[derive(Parser, Debug)]
#[command(name = "tokenauth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "TOKENAUTH_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "TOKENAUTH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "TOKENAUTH_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override the token storage directory
    #[arg(long, global = true, env = "TOKENAUTH_DATA_DIR", hide_env = true)]
    pub data_dir: Option<String>,

    /// Override the token storage backend (persistent, none)
    #[arg(long, global = true, env = "TOKENAUTH_STORAGE", hide_env = true)]
    pub storage: Option<StorageKind>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TOKENAUTH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a config file from the current settings
    Init {
        /// Overwrite an existing config file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Log in and store the access token
    #[command(after_help = "EXAMPLES:\n  \
            tokenauth login                              # Prompt for username and password\n  \
            tokenauth login alice                        # Prompt for password only\n  \
            echo \"$PW\" | tokenauth login alice --password-stdin")]
    Login {
        /// Username (prompted if omitted)
        username: Option<String>,

        /// Read the password from stdin
        #[arg(long)]
        password_stdin: bool,

        /// Password (prefer the prompt or --password-stdin)
        #[arg(long, env = "TOKENAUTH_PASSWORD", hide = true)]
        password: Option<String>,
    },

    /// Show the user the stored token belongs to
    #[command(visible_alias = "me")]
    Whoami,

    /// Print page data ({"user": ...}); never fails on a missing session
    Page,

    /// Forget the stored token
    Logout,

    /// Show configuration and token status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   tokenauth completion bash > /etc/bash_completion.d/tokenauth
  zsh:    tokenauth completion zsh > \"${fpath[1]}/_tokenauth\"
  fish:   tokenauth completion fish > ~/.config/fish/completions/tokenauth.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
