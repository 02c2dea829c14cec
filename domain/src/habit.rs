//! Habit entity as resolved from the host
//!
//! The host owns habit persistence; this crate only reads the snapshot
//! returned by a lookup. The shape mirrors what the habit tracker
//! exposes: identifier, display name, current streak, and the last
//! completion time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a habit, assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(String);

impl HabitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for HabitId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A habit snapshot at the time of lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    /// Consecutive completions without a gap.
    pub current_streak: u32,
    /// When the habit was last marked complete, if ever.
    #[serde(default)]
    pub last_completed: Option<DateTime<Utc>>,
}

impl Habit {
    pub fn new(id: impl Into<HabitId>, name: impl Into<String>, current_streak: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_streak,
            last_completed: None,
        }
    }

    pub fn with_last_completed(mut self, at: DateTime<Utc>) -> Self {
        self.last_completed = Some(at);
        self
    }
}
