//! Presentation layer for habit-motivator
//!
//! This crate contains the CLI definitions and console output,
//! including the terminal notifier that stands in for the host's
//! notification UI.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::{ConsoleNotifier, format_habit_list};
