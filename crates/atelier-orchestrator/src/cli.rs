//! Command-line surface of the `atelier` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "atelier")]
#[command(about = "Outfit recommendation pipeline and scoring harness", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite database file. In-memory when unset.
    #[arg(long, env = "ATELIER_DB", global = true)]
    pub db: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, env = "ATELIER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Run one generation pass and print the payload.
    Generate {
        /// User whose quiz result drives personalization.
        user_id: String,
        /// Seed the styling RNG for reproducible looks.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the scoring matrix and print the run stats.
    Harness {
        /// Drive outfits through the styling stage instead of scenarios.
        #[arg(long)]
        live: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli =
            Cli::try_parse_from(["atelier", "harness", "--live", "--db", "/tmp/a.db"]).unwrap();
        assert_eq!(cli.command, Command::Harness { live: true });
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/a.db")));
    }

    #[test]
    fn help_is_not_a_user_id() {
        let err = Cli::try_parse_from(["atelier", "generate", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn generate_requires_a_user() {
        assert!(Cli::try_parse_from(["atelier", "generate"]).is_err());
        let cli = Cli::try_parse_from(["atelier", "generate", "u-42", "--seed", "7"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Generate {
                user_id: "u-42".to_string(),
                seed: Some(7)
            }
        );
    }
}
