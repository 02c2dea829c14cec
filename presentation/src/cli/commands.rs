//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for habit-motivator
#[derive(Parser, Debug)]
#[command(name = "habit-motivator")]
#[command(author, version, about = "Milestone celebrations and motivational quotes for habit completions")]
#[command(long_about = r#"
habit-motivator reacts to habit completions the way the Daily Motivator
plugin does inside its host: an exact streak milestone (or any multiple
of 100 days past 100) earns a celebration, anything else earns a random
quote from the configured category.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./motivator.toml    Project-level config
3. ~/.config/habit-motivator/config.toml   Global config

Example:
  habit-motivator complete morning-run
  habit-motivator quote
  habit-motivator -vv habits
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (overrides discovered configs)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Skip config file discovery and use defaults
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Host surface simulated as subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dispatch a habit.completed event for a habit id
    Complete {
        /// Habit id as known to the configured store
        habit_id: String,
    },

    /// Show a quote on demand (the show-quote command)
    Quote,

    /// List the habits known to the configured store
    Habits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_parses_habit_id() {
        let cli = Cli::try_parse_from(["habit-motivator", "complete", "morning-run"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Complete { habit_id } if habit_id == "morning-run"
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["habit-motivator", "quote", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["habit-motivator"]).is_err());
    }
}
