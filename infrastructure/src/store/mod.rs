//! Store adapters standing in for the host's persistence

pub mod json;
pub mod memory;

pub use json::{JsonHabitStore, JsonStoreError};
pub use memory::{InMemoryHabitStore, InMemorySettingsStore};
