//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::models::User;
use crate::error::Result;

pub mod json;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

/// JSON rendering shared by every `Formattable` impl
pub(crate) fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(json::format_json(data)?)
}

impl Formattable for User {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => format_json(self),
            OutputFormat::Pretty => {
                let mut out = format!(
                    "{} {}\n  ID: {}",
                    "●".green(),
                    self.username.bold(),
                    self.id
                );
                if let Some(avatar) = &self.avatar {
                    out.push_str(&format!("\n  Avatar: {}", avatar.cyan()));
                }
                Ok(out)
            }
        }
    }
}
