//! Plugin facade bundling the use cases and lifecycle hooks.
//!
//! The host wires this up once: subscribe [`HABIT_COMPLETED_EVENT`] to
//! [`MotivatorPlugin::handle_habit_completed`] and register
//! [`SHOW_QUOTE_COMMAND`] against [`MotivatorPlugin::show_quote`].
//! Lifecycle hooks only log; the plugin holds no state of its own.

use crate::ports::habit_store::HabitStore;
use crate::ports::notifier::Notifier;
use crate::ports::settings_store::SettingsStore;
use crate::use_cases::handle_completion::{
    CompletionEvent, CompletionOutcome, HandleCompletionError, HandleCompletionUseCase,
};
use crate::use_cases::show_quote::ShowQuoteUseCase;
use std::sync::Arc;
use tracing::info;

/// Event name the host dispatches on habit completion.
pub const HABIT_COMPLETED_EVENT: &str = "habit.completed";

/// Command name for on-demand quote display.
pub const SHOW_QUOTE_COMMAND: &str = "show-quote";

/// The Daily Motivator plugin surface.
pub struct MotivatorPlugin {
    completion: HandleCompletionUseCase,
    quote: ShowQuoteUseCase,
}

impl MotivatorPlugin {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        habits: Arc<dyn HabitStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            completion: HandleCompletionUseCase::new(settings.clone(), habits, notifier.clone()),
            quote: ShowQuoteUseCase::new(settings, notifier),
        }
    }

    pub fn on_load(&self) {
        info!("Daily Motivator plugin loaded");
    }

    pub fn on_enable(&self) {
        info!("Daily Motivator enabled");
    }

    pub fn on_disable(&self) {
        info!("Daily Motivator disabled");
    }

    /// Handler for [`HABIT_COMPLETED_EVENT`].
    pub async fn handle_habit_completed(
        &self,
        event: CompletionEvent,
    ) -> Result<CompletionOutcome, HandleCompletionError> {
        self.completion.execute(event).await
    }

    /// Handler for [`SHOW_QUOTE_COMMAND`].
    pub fn show_quote(&self) {
        self.quote.execute()
    }
}
