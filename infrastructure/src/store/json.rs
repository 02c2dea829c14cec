//! JSON-file habit store
//!
//! Reads a host-style habit export: a JSON array of habit objects. The
//! file is re-read on every lookup so external edits (the host marking
//! a completion) are visible without restarting the harness. Lookup
//! failures surface as [`HabitStoreError`] and propagate out of the
//! completion use case untouched.

use async_trait::async_trait;
use motivator_application::ports::habit_store::{HabitStore, HabitStoreError};
use motivator_domain::{Habit, HabitId};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors reading or decoding the habit file
#[derive(Error, Debug)]
pub enum JsonStoreError {
    #[error("Failed to read habit file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Habit file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<JsonStoreError> for HabitStoreError {
    fn from(err: JsonStoreError) -> Self {
        match err {
            JsonStoreError::Io(e) => HabitStoreError::Unavailable(e.to_string()),
            JsonStoreError::Parse(e) => HabitStoreError::Backend(e.to_string()),
        }
    }
}

/// Habit store backed by a JSON file on disk.
pub struct JsonHabitStore {
    path: PathBuf,
}

impl JsonHabitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every habit in the file.
    pub async fn all(&self) -> Result<Vec<Habit>, JsonStoreError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let habits: Vec<Habit> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = habits.len(), "loaded habit file");
        Ok(habits)
    }
}

#[async_trait]
impl HabitStore for JsonHabitStore {
    async fn get(&self, id: &HabitId) -> Result<Option<Habit>, HabitStoreError> {
        let habits = self.all().await.map_err(HabitStoreError::from)?;
        Ok(habits.into_iter().find(|h| &h.id == id))
    }
}
