//! Favorites listing handler.

use std::collections::HashSet;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_photo_table;

/// List favorites, or remove them all with `clear`.
pub async fn execute(ctx: &CliContext, clear: bool) -> Result<(), CliError> {
    if clear {
        let count = ctx.service().favorites_count().await?;
        ctx.service().clear_favorites().await?;
        println!("Removed {count} favorite(s).");
        return Ok(());
    }

    let favorites = ctx.service().list_favorites().await?;
    if favorites.is_empty() {
        println!("No favorites yet.");
        println!("Use 'photodeck favorite <id>' to save a photo.");
        return Ok(());
    }

    let ids: HashSet<i64> = favorites.iter().map(|p| p.id).collect();
    println!("{} favorite(s), newest first:\n", favorites.len());
    print_photo_table(&favorites, &ids);
    Ok(())
}
