#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, ProfileCommand};
pub use error::CliError;
pub use parser::Cli;

/// Dispatch a parsed command to its handler.
pub async fn run(ctx: &CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Search {
            query,
            pages,
            per_page,
        } => handlers::search::execute(ctx, &query, pages, per_page).await,
        Commands::Curated { page, per_page } => {
            handlers::curated::execute(ctx, page, per_page).await
        }
        Commands::Photo { id } => handlers::photo::execute(ctx, id).await,
        Commands::Favorite { id } => handlers::photo::toggle_favorite(ctx, id).await,
        Commands::Favorites { clear } => handlers::favorites::execute(ctx, clear).await,
        Commands::History { prefix, clear } => {
            handlers::history::execute(ctx, prefix.as_deref(), clear).await
        }
        Commands::Profile { command } => match command {
            ProfileCommand::Show => handlers::profile::show(ctx).await,
            ProfileCommand::Set { name, avatar } => {
                handlers::profile::set(ctx, name, avatar).await
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::online;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_run_dispatches_commands() {
        let (ctx, _db) = online(1).await;

        assert_ok!(
            run(
                &ctx,
                Commands::Search {
                    query: "sea".to_string(),
                    pages: 1,
                    per_page: None,
                },
            )
            .await
        );
        assert_ok!(run(&ctx, Commands::Favorite { id: 4 }).await);
        assert_ok!(run(&ctx, Commands::Favorites { clear: false }).await);
        assert_ok!(
            run(
                &ctx,
                Commands::History {
                    prefix: None,
                    clear: false,
                },
            )
            .await
        );

        assert!(ctx.service().is_favorite(4).await.unwrap());
        assert_eq!(ctx.service().recent_searches().await.unwrap().len(), 1);
    }
}
