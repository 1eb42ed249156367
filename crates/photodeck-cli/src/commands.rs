//! Subcommand definitions.

use clap::Subcommand;

/// Top-level subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Search photos and print the accumulated results
    Search {
        /// Search text
        query: String,
        /// Number of pages to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
        /// Photos per page (1-80)
        #[arg(long = "per-page", value_parser = clap::value_parser!(u32).range(1..=80))]
        per_page: Option<u32>,
    },
    /// Show the curated selection
    Curated {
        /// Page to show
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Photos per page (1-80)
        #[arg(long = "per-page", value_parser = clap::value_parser!(u32).range(1..=80))]
        per_page: Option<u32>,
    },
    /// Show one photo, from favorites if saved
    Photo {
        /// Photo identifier
        id: i64,
    },
    /// Add a photo to favorites, or remove it if already saved
    Favorite {
        /// Photo identifier
        id: i64,
    },
    /// List favorites, newest first
    Favorites {
        /// Remove all favorites
        #[arg(long)]
        clear: bool,
    },
    /// List recent searches, optionally filtered by prefix
    History {
        /// Only show searches starting with this text
        prefix: Option<String>,
        /// Delete the search history
        #[arg(long, conflicts_with = "prefix")]
        clear: bool,
    },
    /// Show or edit the user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

/// Profile subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ProfileCommand {
    /// Print the stored profile
    Show,
    /// Update name and/or avatar; omitted fields keep their value
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Avatar image path or URL; pass an empty string to remove it
        #[arg(long)]
        avatar: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Commands {
        let mut full = vec!["photodeck"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap().command.unwrap()
    }

    #[test]
    fn test_search_defaults() {
        assert_eq!(
            parse(&["search", "mountain lake"]),
            Commands::Search {
                query: "mountain lake".to_string(),
                pages: 1,
                per_page: None,
            }
        );
    }

    #[test]
    fn test_search_paging_flags() {
        assert_eq!(
            parse(&["search", "cats", "--pages", "3", "--per-page", "40"]),
            Commands::Search {
                query: "cats".to_string(),
                pages: 3,
                per_page: Some(40),
            }
        );
    }

    #[test]
    fn test_per_page_is_bounded() {
        assert!(Cli::try_parse_from(["photodeck", "search", "cats", "--per-page", "81"]).is_err());
        assert!(Cli::try_parse_from(["photodeck", "search", "cats", "--pages", "0"]).is_err());
    }

    #[test]
    fn test_history_clear_conflicts_with_prefix() {
        assert!(Cli::try_parse_from(["photodeck", "history", "ca", "--clear"]).is_err());
        assert_eq!(
            parse(&["history", "ca"]),
            Commands::History {
                prefix: Some("ca".to_string()),
                clear: false,
            }
        );
    }

    #[test]
    fn test_profile_set() {
        assert_eq!(
            parse(&["profile", "set", "--name", "Ada"]),
            Commands::Profile {
                command: ProfileCommand::Set {
                    name: Some("Ada".to_string()),
                    avatar: None,
                },
            }
        );
    }
}
