//! Logout command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;

/// Clear the stored token. Safe to run when already logged out.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let had_token = ctx.tokens().get().is_some();
    ctx.tokens().clear();

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "cleared": had_token });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Pretty => {
            if had_token {
                println!("{} Logged out", "✓".green());
            } else {
                println!("{} No token was stored", "○".dimmed());
            }
        }
    }

    Ok(())
}
