//! CLI entrypoint for habit-motivator
//!
//! This binary stands in for the plugin host: it wires the stores and
//! the console notifier into the plugin, then maps subcommands onto
//! the host's event and command surface.

use anyhow::{Context, Result};
use clap::Parser;
use motivator_application::{CompletionEvent, HabitStore, MotivatorPlugin};
use motivator_domain::Habit;
use motivator_infrastructure::{
    ConfigLoader, FileConfig, InMemoryHabitStore, InMemorySettingsStore, JsonHabitStore,
};
use motivator_presentation::{Cli, Command, ConsoleNotifier, format_habit_list};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load config: {e}"))?
    };

    match cli.command {
        Command::Habits => {
            let habits = match &config.store.habits_file {
                Some(path) => {
                    let store = JsonHabitStore::new(path);
                    store.all().await.with_context(|| {
                        format!("listing habits from {}", store.path().display())
                    })?
                }
                None => demo_store().all(),
            };
            print!("{}", format_habit_list(&habits));
        }

        Command::Complete { habit_id } => {
            let plugin = build_plugin(&config);
            plugin.on_load();
            plugin.on_enable();

            let outcome = plugin
                .handle_habit_completed(CompletionEvent::new(habit_id))
                .await?;
            info!(?outcome, "completion handled");

            plugin.on_disable();
        }

        Command::Quote => {
            let plugin = build_plugin(&config);
            plugin.on_load();
            plugin.on_enable();
            plugin.show_quote();
            plugin.on_disable();
        }
    }

    Ok(())
}

/// Wire the plugin with stores chosen by the config (dependency injection).
fn build_plugin(config: &FileConfig) -> MotivatorPlugin {
    let settings = Arc::new(InMemorySettingsStore::new(config.settings.to_settings()));

    let habits: Arc<dyn HabitStore> = match &config.store.habits_file {
        Some(path) => Arc::new(JsonHabitStore::new(path)),
        None => Arc::new(demo_store()),
    };

    MotivatorPlugin::new(settings, habits, Arc::new(ConsoleNotifier))
}

/// Built-in habits used when no habit file is configured.
fn demo_store() -> InMemoryHabitStore {
    InMemoryHabitStore::new(vec![
        Habit::new("morning-run", "Morning run", 7),
        Habit::new("meditate", "Meditate 10 minutes", 42),
        Habit::new("journal", "Evening journal", 200),
        Habit::new("read", "Read 10 pages", 0),
    ])
}
