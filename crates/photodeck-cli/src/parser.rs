//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Browse, search and collect photos from the command line.
///
/// Global options fall back to `PHOTODECK_*` environment variables, which may
/// also come from a `.env` file.
#[derive(Parser)]
#[command(name = "photodeck")]
#[command(about = "Search photos, keep favorites and manage your profile")]
#[command(version)]
pub struct Cli {
    /// API key for the photo service
    #[arg(long, env = "PHOTODECK_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the photo service
    #[arg(long, env = "PHOTODECK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory holding the local database
    #[arg(long, env = "PHOTODECK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "photodeck",
            "--verbose",
            "--api-key",
            "k",
            "--data-dir",
            "/tmp/photodeck",
            "favorites",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/photodeck")));
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::parse_from(["photodeck"]);
        assert!(cli.command.is_none());
    }
}
