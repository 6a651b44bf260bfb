//! Init command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::{Error, Result};

/// Write a config file from defaults plus any `--api-url`, `--data-dir`
/// and `--storage` overrides.
pub fn run(opts: &GlobalOptions, force: bool) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    if path.exists() && !force {
        return Err(Error::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut config = Config::default();
    config.apply_overrides(opts.api_url_ref(), opts.data_dir_ref(), opts.storage);
    config.save_to(&path)?;

    println!(
        "{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );
    println!("  API URL: {}", config.api_url.bold());

    println!("\n{}", "Next:".bold());
    println!("  {} - Log in", "tokenauth login".cyan());
    println!("  {} - Show session status", "tokenauth status".cyan());

    Ok(())
}
