//! Whoami command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AuthApi;
use crate::error::Result;
use crate::output;

/// Fetch and print the current user. Failures propagate.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let user = ctx.client.current_user().await?;
    output::print(&user, ctx.format)
}
