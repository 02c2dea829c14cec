//! Port definitions (interfaces for host capabilities)
//!
//! Ports define the contracts the host environment (or the CLI harness
//! standing in for it) must implement.

pub mod habit_store;
pub mod notifier;
pub mod settings_store;
