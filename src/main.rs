//! tokenauth - bearer-token login helper for the auth API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod page;
mod storage;

use cli::login::PasswordSource;
use cli::{Cli, Commands, GlobalOptions};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if let Error::Auth(auth) = &err {
            if auth.is_unauthenticated() {
                eprintln!("  → Run 'tokenauth login' to log in");
            }
        }
        std::process::exit(1);
    }
}

/// `RUST_LOG` is honored (default `warn`); `--debug` raises this crate to `debug`
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("tokenauth", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init { force } => cli::init::run(&opts, force),
        Commands::Login {
            username,
            password_stdin,
            password,
        } => {
            let source = PasswordSource::pick(password_stdin, password);
            cli::login::run(&opts, username, source).await
        }
        Commands::Whoami => cli::whoami::run(&opts).await,
        Commands::Page => cli::page::run(&opts).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("tokenauth version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
