//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "anxlog")]
#[command(about = "Terminal anxiety journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Number of recent entries shown by `trend`
        #[arg(long)]
        trend_window: Option<usize>,
    },

    /// Record how anxious you feel right now
    #[command(visible_alias = "add")]
    Log {
        /// Level 0-5 in steps of 0.5, or none|mild|moderate|high|extreme
        #[arg(short, long)]
        level: String,

        /// Trigger (Work, Relationships, Health, Environment, Other, or your own)
        #[arg(short, long, default_value = "")]
        category: String,

        /// Free-text notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// List recorded entries
    List {
        /// Order: stored (as saved, newest first), newest, oldest
        #[arg(short, long, default_value = "stored")]
        order: String,

        /// Only show entries with this trigger category
        #[arg(short, long)]
        category: Option<String>,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id as shown by `list`
        id: String,
    },

    /// Delete all entries
    Clear {
        /// Confirm deleting everything
        #[arg(long)]
        yes: bool,
    },

    /// Show the trend of recent levels
    Trend,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_alias_and_flags() {
        let cli = Cli::try_parse_from([
            "anxlog", "add", "-l", "high", "-c", "work", "-n", "deadline",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Log {
                level,
                category,
                notes,
            }) => {
                assert_eq!(level, "high");
                assert_eq!(category, "work");
                assert_eq!(notes, "deadline");
            }
            other => panic!("Expected Log command, got {:?}", other),
        }
    }

    #[test]
    fn test_log_requires_level() {
        assert!(Cli::try_parse_from(["anxlog", "log", "--notes", "x"]).is_err());
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["anxlog", "list"]).unwrap();
        match cli.command {
            Some(Commands::List {
                order,
                category,
                limit,
            }) => {
                assert_eq!(order, "stored");
                assert_eq!(category, None);
                assert_eq!(limit, None);
            }
            other => panic!("Expected List command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
