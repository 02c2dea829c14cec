//! Application layer for habit-motivator
//!
//! This crate contains the use cases and the ports they depend on.
//! Ports abstract the host capabilities (settings storage, habit
//! lookup, notification UI) so use cases can be exercised with fakes.

pub mod plugin;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use plugin::{HABIT_COMPLETED_EVENT, MotivatorPlugin, SHOW_QUOTE_COMMAND};
pub use ports::{
    habit_store::{HabitStore, HabitStoreError},
    notifier::{Notifier, NullNotifier},
    settings_store::{DefaultSettings, SettingsStore},
};
pub use use_cases::{
    handle_completion::{
        CompletionEvent, CompletionOutcome, HandleCompletionError, HandleCompletionUseCase,
    },
    show_quote::ShowQuoteUseCase,
};
