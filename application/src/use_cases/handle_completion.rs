//! Handle Completion use case.
//!
//! Reacts to a `habit.completed` event from the host: celebrate a
//! streak milestone when one applies, otherwise show a motivational
//! quote from the configured category.
//!
//! The settings snapshot is taken before the habit lookup awaits, so
//! nothing shared is held across the suspension point.

use crate::ports::habit_store::{HabitStore, HabitStoreError};
use crate::ports::notifier::Notifier;
use crate::ports::settings_store::SettingsStore;
use motivator_domain::{HabitId, MilestoneTable, Notification, QuoteCatalog};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while handling a completion event.
///
/// Only the habit lookup can fail; the failure is not caught here and
/// propagates to the host's dispatch error handling. No retries.
#[derive(Error, Debug)]
pub enum HandleCompletionError {
    #[error("Habit lookup failed: {0}")]
    HabitLookup(#[from] HabitStoreError),
}

/// Payload of the inbound `habit.completed` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEvent {
    pub habit_id: HabitId,
}

impl CompletionEvent {
    pub fn new(habit_id: impl Into<HabitId>) -> Self {
        Self {
            habit_id: habit_id.into(),
        }
    }
}

/// What the handler decided to do, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// A milestone message was shown for this streak length.
    Celebrated { streak: u32 },
    /// A quote from this category was shown.
    Quoted { category: String },
    /// The habit id resolved to nothing; no notification was shown.
    HabitNotFound,
}

/// Use case for reacting to a habit completion.
///
/// Decision order:
/// 1. unresolvable habit: silent no-op;
/// 2. celebrations enabled and positive streak: milestone check first;
/// 3. fallback: random quote from the configured category.
pub struct HandleCompletionUseCase {
    settings: Arc<dyn SettingsStore>,
    habits: Arc<dyn HabitStore>,
    notifier: Arc<dyn Notifier>,
    catalog: QuoteCatalog,
    milestones: MilestoneTable,
}

impl HandleCompletionUseCase {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        habits: Arc<dyn HabitStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            habits,
            notifier,
            catalog: QuoteCatalog::builtin().clone(),
            milestones: MilestoneTable::builtin().clone(),
        }
    }

    /// Replace the built-in quote catalog.
    pub fn with_catalog(mut self, catalog: QuoteCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the built-in milestone table.
    pub fn with_milestones(mut self, milestones: MilestoneTable) -> Self {
        self.milestones = milestones;
        self
    }

    /// Handle one completion event.
    pub async fn execute(
        &self,
        event: CompletionEvent,
    ) -> Result<CompletionOutcome, HandleCompletionError> {
        // Snapshot settings before the only await point.
        let settings = self.settings.get().unwrap_or_default();

        let Some(habit) = self.habits.get(&event.habit_id).await? else {
            debug!(habit_id = %event.habit_id, "habit not found, skipping");
            return Ok(CompletionOutcome::HabitNotFound);
        };

        if settings.enable_streak_celebration && habit.current_streak > 0 {
            if let Some(message) = self.milestones.celebration(habit.current_streak) {
                info!(habit = %habit.id, streak = habit.current_streak, "streak milestone reached");
                self.notifier.show(Notification::milestone_from(message));
                return Ok(CompletionOutcome::Celebrated {
                    streak: habit.current_streak,
                });
            }
        }

        let quote = self.catalog.pick(&settings.quote_category);
        debug!(habit = %habit.id, category = %settings.quote_category, "showing quote");
        self.notifier.show(Notification::completion_quote(quote));
        Ok(CompletionOutcome::Quoted {
            category: settings.quote_category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use motivator_domain::{Habit, MotivatorSettings, NotificationKind, Quote};
    use std::collections::{BTreeMap, HashMap};
    use std::sync::Mutex;

    // === Mock implementations ===

    struct FixedSettings(Option<MotivatorSettings>);

    impl SettingsStore for FixedSettings {
        fn get(&self) -> Option<MotivatorSettings> {
            self.0.clone()
        }
    }

    struct MockHabitStore {
        habits: HashMap<HabitId, Habit>,
        fail: bool,
    }

    impl MockHabitStore {
        fn with(habits: Vec<Habit>) -> Self {
            Self {
                habits: habits.into_iter().map(|h| (h.id.clone(), h)).collect(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                habits: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl HabitStore for MockHabitStore {
        async fn get(&self, id: &HabitId) -> Result<Option<Habit>, HabitStoreError> {
            if self.fail {
                return Err(HabitStoreError::Unavailable("mock store down".to_string()));
            }
            Ok(self.habits.get(id).cloned())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        shown: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn shown(&self) -> Vec<Notification> {
            self.shown.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn show(&self, notification: Notification) {
            self.shown.lock().unwrap().push(notification);
        }
    }

    fn use_case(
        settings: Option<MotivatorSettings>,
        habits: Vec<Habit>,
    ) -> (HandleCompletionUseCase, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = HandleCompletionUseCase::new(
            Arc::new(FixedSettings(settings)),
            Arc::new(MockHabitStore::with(habits)),
            notifier.clone(),
        );
        (use_case, notifier)
    }

    #[tokio::test]
    async fn test_streak_milestone_shows_success_notification() {
        let (use_case, notifier) =
            use_case(None, vec![Habit::new("h1", "Morning run", 3)]);

        let outcome = use_case
            .execute(CompletionEvent::new("h1"))
            .await
            .unwrap();

        assert_eq!(outcome, CompletionOutcome::Celebrated { streak: 3 });
        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Success);
        assert_eq!(shown[0].title, "Streak Milestone!");
        assert_eq!(shown[0].message, "3 day streak! You're building momentum!");
    }

    #[tokio::test]
    async fn test_non_milestone_streak_falls_back_to_quote() {
        let (use_case, notifier) =
            use_case(None, vec![Habit::new("h1", "Morning run", 42)]);

        let outcome = use_case
            .execute(CompletionEvent::new("h1"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            CompletionOutcome::Quoted {
                category: "motivation".to_string()
            }
        );
        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Info);
        assert_eq!(shown[0].title, "Great job!");
    }

    #[tokio::test]
    async fn test_disabled_celebration_skips_milestone() {
        let settings = MotivatorSettings {
            enable_streak_celebration: false,
            ..Default::default()
        };
        let (use_case, notifier) =
            use_case(Some(settings), vec![Habit::new("h1", "Morning run", 7)]);

        let outcome = use_case
            .execute(CompletionEvent::new("h1"))
            .await
            .unwrap();

        assert!(matches!(outcome, CompletionOutcome::Quoted { .. }));
        assert_eq!(notifier.shown()[0].kind, NotificationKind::Info);
    }

    #[tokio::test]
    async fn test_unknown_habit_is_silent_noop() {
        let (use_case, notifier) = use_case(None, vec![]);

        let outcome = use_case
            .execute(CompletionEvent::new("missing"))
            .await
            .unwrap();

        assert_eq!(outcome, CompletionOutcome::HabitNotFound);
        assert!(notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn test_zero_streak_takes_quote_path() {
        let (use_case, notifier) = use_case(None, vec![Habit::new("h1", "New habit", 0)]);

        let outcome = use_case
            .execute(CompletionEvent::new("h1"))
            .await
            .unwrap();

        assert!(matches!(outcome, CompletionOutcome::Quoted { .. }));
        assert_eq!(notifier.shown().len(), 1);
    }

    #[tokio::test]
    async fn test_configured_category_drives_quote_selection() {
        let settings = MotivatorSettings {
            quote_category: "mindfulness".to_string(),
            ..Default::default()
        };
        let (use_case, notifier) =
            use_case(Some(settings), vec![Habit::new("h1", "Meditate", 5)]);

        use_case.execute(CompletionEvent::new("h1")).await.unwrap();

        let mindfulness: Vec<String> = QuoteCatalog::builtin()
            .category("mindfulness")
            .iter()
            .map(Quote::attributed)
            .collect();
        assert!(mindfulness.contains(&notifier.shown()[0].message));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = HandleCompletionUseCase::new(
            Arc::new(FixedSettings(None)),
            Arc::new(MockHabitStore::failing()),
            notifier.clone(),
        );

        let result = use_case.execute(CompletionEvent::new("h1")).await;

        assert!(matches!(
            result,
            Err(HandleCompletionError::HabitLookup(
                HabitStoreError::Unavailable(_)
            ))
        ));
        assert!(notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn test_custom_tables_replace_builtins() {
        let (use_case, notifier) = use_case(
            None,
            vec![Habit::new("h1", "Stretch", 5), Habit::new("h2", "Floss", 4)],
        );
        let catalog = QuoteCatalog::new(HashMap::from([(
            "motivation".to_string(),
            vec![Quote::new("Keep going.", "Coach")],
        )]))
        .unwrap();
        let use_case = use_case.with_catalog(catalog).with_milestones(
            MilestoneTable::new(BTreeMap::from([(5, "Five days!".to_string())])),
        );

        let outcome = use_case.execute(CompletionEvent::new("h1")).await.unwrap();
        assert_eq!(outcome, CompletionOutcome::Celebrated { streak: 5 });
        assert_eq!(notifier.shown()[0].message, "Five days!");

        let outcome = use_case.execute(CompletionEvent::new("h2")).await.unwrap();
        assert!(matches!(outcome, CompletionOutcome::Quoted { .. }));
        assert_eq!(notifier.shown()[1].message, "\"Keep going.\" — Coach");
    }

    #[tokio::test]
    async fn test_extended_rule_beyond_table() {
        let (use_case, notifier) =
            use_case(None, vec![Habit::new("h1", "Journaling", 200)]);

        let outcome = use_case
            .execute(CompletionEvent::new("h1"))
            .await
            .unwrap();

        assert_eq!(outcome, CompletionOutcome::Celebrated { streak: 200 });
        assert_eq!(notifier.shown()[0].message, "200 day streak! Phenomenal!");
    }
}
