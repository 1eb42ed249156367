//! Search history handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_history;

/// List recent searches, filter them by prefix, or clear them.
pub async fn execute(ctx: &CliContext, prefix: Option<&str>, clear: bool) -> Result<(), CliError> {
    if clear {
        ctx.service().clear_search_history().await?;
        println!("Search history cleared.");
        return Ok(());
    }

    let entries = match prefix {
        Some(prefix) => ctx.service().search_in_history(prefix).await?,
        None => ctx.service().recent_searches().await?,
    };

    if entries.is_empty() {
        println!("No matching searches.");
        return Ok(());
    }

    print_history(&entries);
    Ok(())
}
