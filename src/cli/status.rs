//! Status command implementation

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::jwt::peek_claims;
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Formattable};

/// Local session state; nothing here contacts the server
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub config_path: String,
    pub config_found: bool,
    pub api_url: String,
    pub storage: &'static str,
    pub token_key: String,
    pub token_stored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl StatusReport {
    fn collect(opts: &GlobalOptions, ctx: &CommandContext) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let token = ctx.tokens().get();
        let claims = token.as_deref().and_then(peek_claims);

        Ok(Self {
            config_path: config_path.display().to_string(),
            config_found: config_path.exists(),
            api_url: ctx.config.api_url.clone(),
            storage: ctx.tokens().backend(),
            token_key: ctx.config.token_key.clone(),
            token_stored: token.is_some(),
            stored_at: token.as_ref().and_then(|_| ctx.tokens().updated_at()),
            subject: claims.as_ref().and_then(|c| c.subject.clone()),
            expires_at: claims.and_then(|c| c.expires_at),
        })
    }

    fn pretty(&self, now: DateTime<Utc>) -> String {
        let mut lines = vec![format!("{}\n", "tokenauth Status".bold())];

        if self.config_found {
            lines.push(format!("Config file: {}", self.config_path.cyan()));
        } else {
            lines.push(format!(
                "Config file: {} {}",
                self.config_path.dimmed(),
                "(not found, using defaults)".dimmed()
            ));
        }
        lines.push(format!("API URL:     {}", self.api_url.cyan()));
        lines.push(format!("Storage:     {}", self.storage));
        lines.push(String::new());

        if !self.token_stored {
            lines.push(format!("{} No token stored", "○".dimmed()));
            lines.push("  → Run 'tokenauth login' to log in".to_string());
            return lines.join("\n");
        }

        let mut stored = format!("{} Token stored", "✓".green());
        if let Some(at) = self.stored_at {
            stored.push_str(&format!(" ({})", at.format("%Y-%m-%d %H:%M UTC")));
        }
        lines.push(stored);

        if let Some(sub) = &self.subject {
            lines.push(format!("  Subject: {}", sub));
        }

        match self.expires_at {
            Some(exp) if exp <= now => lines.push(format!(
                "{} Token expired at {}",
                "⚠".yellow(),
                exp.format("%Y-%m-%d %H:%M UTC")
            )),
            Some(exp) => {
                let remaining = exp.signed_duration_since(now);
                lines.push(format!(
                    "  Expires in {}h {}m",
                    remaining.num_hours(),
                    remaining.num_minutes() % 60
                ));
            }
            None => {}
        }

        lines.join("\n")
    }
}

impl Formattable for StatusReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => output::format_json(self),
            OutputFormat::Pretty => Ok(self.pretty(Utc::now())),
        }
    }
}

/// Run the status command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let report = StatusReport::collect(opts, &ctx)?;
    output::print(&report, ctx.format)
}
