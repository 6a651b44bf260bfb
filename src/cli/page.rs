//! Page command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::page::load_page_data;

/// Print the page data JSON. A missing or rejected session prints
/// `{"user": null}` and still succeeds.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let data = load_page_data(&ctx.client).await;
    println!("{}", serde_json::to_string(&data)?);
    Ok(())
}
