//! Login command implementation

use std::io::BufRead;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::AuthApi;
use crate::client::models::Credentials;
use crate::error::{Error, Result};

/// How the password reaches the command
#[derive(Debug)]
pub enum PasswordSource {
    /// First line of stdin
    Stdin,
    /// Already known (flag or environment)
    Given(String),
    /// Hidden interactive prompt
    Prompt,
}

impl PasswordSource {
    /// Pick the source: stdin beats a given value beats the prompt
    pub fn pick(password_stdin: bool, given: Option<String>) -> Self {
        if password_stdin {
            PasswordSource::Stdin
        } else if let Some(p) = given {
            PasswordSource::Given(p)
        } else {
            PasswordSource::Prompt
        }
    }

    fn resolve(self) -> Result<String> {
        match self {
            PasswordSource::Stdin => read_password_line(std::io::stdin().lock()),
            PasswordSource::Given(p) => Ok(p),
            PasswordSource::Prompt => Ok(Password::with_theme(&ColorfulTheme::default())
                .with_prompt("Password")
                .interact()?),
        }
    }
}

/// Read one line and strip the trailing newline
fn read_password_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(Error::Other("no password on stdin".to_string()));
    }
    Ok(password)
}

/// Run the login command
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    password: PasswordSource,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = match username {
        Some(u) => u,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = password.resolve()?;

    if ctx.format == OutputFormat::Pretty {
        println!("{}", "Logging in...".cyan());
    }

    let token = ctx
        .client
        .login(&Credentials::new(username.clone(), password))
        .await?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "username": username,
                "token_type": token.token_type,
                "storage": ctx.tokens().backend(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Pretty => {
            println!(
                "{} Logged in as {} ({} token)",
                "✓".green(),
                username.bold(),
                token.token_type
            );
            if ctx.tokens().get().is_none() {
                println!(
                    "{} Token storage is unavailable; the token was not kept",
                    "⚠".yellow()
                );
            }
        }
    }

    Ok(())
}
