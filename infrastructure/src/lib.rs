//! Infrastructure layer for habit-motivator
//!
//! This crate contains adapters that implement the ports defined in
//! the application layer, standing in for the host environment:
//! in-memory and JSON-file stores plus configuration file loading
//! for the CLI harness.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileSettingsConfig, FileStoreConfig};
pub use store::{
    json::{JsonHabitStore, JsonStoreError},
    memory::{InMemoryHabitStore, InMemorySettingsStore},
};
