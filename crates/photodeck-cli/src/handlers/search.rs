//! Search command handler.
//!
//! Drives a `SearchCoordinator` through the first page and as many further
//! pages as requested, then prints the accumulated results.

use std::collections::HashSet;
use std::sync::Arc;

use photodeck_core::{SearchCoordinator, SearchPhase};
use tracing::debug;

use super::join;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_photo_table;

/// Execute the search command.
pub async fn execute(
    ctx: &CliContext,
    query: &str,
    pages: u32,
    per_page: Option<u32>,
) -> Result<(), CliError> {
    let config = match per_page {
        Some(n) => ctx.search.clone().with_page_size(n),
        None => ctx.search.clone(),
    };
    let coordinator = SearchCoordinator::new(Arc::clone(ctx.service()), &config);

    let Some(first) = coordinator.submit_query(query) else {
        return Err(CliError::Arguments("search text must not be blank".to_string()));
    };
    join(first).await?;

    let state = coordinator.snapshot();
    if state.phase == SearchPhase::Failed {
        return Err(CliError::Service(state.error.unwrap_or_default()));
    }

    for _ in 1..pages {
        let before = coordinator.snapshot().photos.len();
        if let Some(next) = coordinator.load_next_page() {
            join(next).await?;
        }
        let state = coordinator.snapshot();
        if let Some(error) = &state.error {
            eprintln!("Stopped after page {}: {error}", state.page);
            break;
        }
        if state.photos.len() == before {
            debug!(page = state.page, "No more results");
            break;
        }
    }

    let state = coordinator.snapshot();
    if let Some(notice) = &state.notice {
        println!("{notice}");
        return Ok(());
    }

    let favorites: HashSet<i64> = ctx
        .service()
        .list_favorites()
        .await?
        .iter()
        .map(|p| p.id)
        .collect();

    println!(
        "Found {} photo(s) for \"{}\" ({} page(s)):\n",
        state.photos.len(),
        query.trim(),
        state.page
    );
    print_photo_table(&state.photos, &favorites);
    Ok(())
}
