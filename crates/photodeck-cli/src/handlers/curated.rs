//! Curated command handler.

use std::collections::HashSet;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_photo_table;

/// Execute the curated command.
pub async fn execute(ctx: &CliContext, page: u32, per_page: Option<u32>) -> Result<(), CliError> {
    let per_page = per_page.unwrap_or(ctx.search.page_size);
    let result = ctx.service().curated_photos(page, per_page).await?;

    if result.is_empty() {
        println!("No curated photos on page {page}.");
        return Ok(());
    }

    let favorites: HashSet<i64> = ctx
        .service()
        .list_favorites()
        .await?
        .iter()
        .map(|p| p.id)
        .collect();

    println!("Curated photos, page {}:\n", result.page);
    print_photo_table(&result.photos, &favorites);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::online;

    #[tokio::test]
    async fn test_curated_leaves_history_alone() {
        let (ctx, _db) = online(1).await;

        execute(&ctx, 1, None).await.unwrap();
        execute(&ctx, 2, None).await.unwrap();

        assert!(ctx.service().recent_searches().await.unwrap().is_empty());
    }
}
