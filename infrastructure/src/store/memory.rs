//! In-memory store adapters
//!
//! Used by the CLI harness when no habit file is configured, and by
//! integration tests. Habits are fixed at construction; settings are
//! writable because the host owns them and may update between reads.

use async_trait::async_trait;
use motivator_application::ports::habit_store::{HabitStore, HabitStoreError};
use motivator_application::ports::settings_store::SettingsStore;
use motivator_domain::{Habit, HabitId, MotivatorSettings};
use std::collections::HashMap;
use std::sync::Mutex;

/// Habit store backed by a fixed in-memory map.
pub struct InMemoryHabitStore {
    habits: HashMap<HabitId, Habit>,
}

impl InMemoryHabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            habits: habits.into_iter().map(|h| (h.id.clone(), h)).collect(),
        }
    }

    /// All habits, sorted by id for stable listing.
    pub fn all(&self) -> Vec<Habit> {
        let mut habits: Vec<Habit> = self.habits.values().cloned().collect();
        habits.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        habits
    }
}

#[async_trait]
impl HabitStore for InMemoryHabitStore {
    async fn get(&self, id: &HabitId) -> Result<Option<Habit>, HabitStoreError> {
        Ok(self.habits.get(id).cloned())
    }
}

/// Settings store backed by a mutex-guarded snapshot.
#[derive(Default)]
pub struct InMemorySettingsStore {
    settings: Mutex<Option<MotivatorSettings>>,
}

impl InMemorySettingsStore {
    pub fn new(settings: MotivatorSettings) -> Self {
        Self {
            settings: Mutex::new(Some(settings)),
        }
    }

    /// Replace the stored settings, as the host would on a user edit.
    pub fn set(&self, settings: MotivatorSettings) {
        *self.settings.lock().unwrap() = Some(settings);
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get(&self) -> Option<MotivatorSettings> {
        self.settings.lock().unwrap().clone()
    }
}
