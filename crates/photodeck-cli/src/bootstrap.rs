//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and repositories (via photodeck-db)
//! - HTTP client for the photo service (via photodeck-api)
//! - Core services (via photodeck-core)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use photodeck_api::{DefaultPhotoClient, PhotoApiConfig};
use photodeck_core::{
    PhotoApiPort, PhotoService, Repos, SearchConfig, database_path, database_path_in,
};
use photodeck_db::CoreFactory;
use tracing::debug;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Credential for the photo service.
    pub api_key: Option<String>,
    /// Base URL override for the photo service.
    pub api_url: Option<String>,
    /// Data root override; the platform data directory otherwise.
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Take settings from parsed arguments (which already include env
    /// fallbacks).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_key: cli.api_key.clone().filter(|k| !k.trim().is_empty()),
            api_url: cli.api_url.clone(),
            data_dir: cli.data_dir.clone(),
        }
    }

    fn api_config(&self) -> PhotoApiConfig {
        let config = PhotoApiConfig::new().with_optional_api_key(self.api_key.clone());
        match &self.api_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    fn database_path(&self) -> Result<PathBuf> {
        Ok(match &self.data_dir {
            Some(root) => database_path_in(root)?,
            None => database_path()?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The photo service shared by all handlers.
    pub service: Arc<PhotoService>,
    /// Paging and history settings.
    pub search: SearchConfig,
}

impl CliContext {
    /// Access the photo service.
    pub const fn service(&self) -> &Arc<PhotoService> {
        &self.service
    }
}

/// Bootstrap the CLI application.
///
/// Opens (or creates) the database, builds the HTTP client and assembles the
/// photo service.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let db_path = config.database_path()?;
    debug!(path = %db_path.display(), "Opening database");
    let repos = CoreFactory::open_repos(&db_path).await?;

    let api: Arc<dyn PhotoApiPort> = Arc::new(DefaultPhotoClient::new(&config.api_config())?);

    Ok(bootstrap_with(api, repos, SearchConfig::new()))
}

/// Bootstrap with custom ports (for testing).
pub fn bootstrap_with(api: Arc<dyn PhotoApiPort>, repos: Repos, search: SearchConfig) -> CliContext {
    let service = PhotoService::new(api, repos)
        .with_limits(search.history_limit, search.suggestion_limit);
    CliContext {
        service: Arc::new(service),
        search,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_blank_api_key_is_ignored() {
        let cli = Cli::parse_from(["photodeck", "--api-key", "  ", "favorites"]);
        assert!(CliConfig::from_cli(&cli).api_key.is_none());
    }

    #[test]
    fn test_data_dir_selects_database_location() {
        let temp = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: Some(temp.path().to_path_buf()),
            ..CliConfig::default()
        };

        let path = config.database_path().unwrap();

        assert_eq!(path, temp.path().join("data").join("photodeck.db"));
    }

    #[tokio::test]
    async fn test_bootstrap_creates_database() {
        let temp = tempfile::tempdir().unwrap();
        let config = CliConfig {
            api_key: Some("key".to_string()),
            api_url: Some("http://127.0.0.1:9/".to_string()),
            data_dir: Some(temp.path().to_path_buf()),
        };

        let ctx = bootstrap(config).await.unwrap();

        assert_eq!(ctx.service().favorites_count().await.unwrap(), 0);
        assert!(temp.path().join("data").join("photodeck.db").exists());
    }
}
