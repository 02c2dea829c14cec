//! Port for resolving habits from the host.
//!
//! The lookup is the single asynchronous capability this plugin uses.
//! A missing habit is a normal outcome (`Ok(None)`), not an error;
//! errors mean the store itself failed and are propagated to the
//! host's dispatch error handling.

use async_trait::async_trait;
use motivator_domain::{Habit, HabitId};
use thiserror::Error;

/// Errors that can occur during a habit lookup
#[derive(Error, Debug)]
pub enum HabitStoreError {
    #[error("Habit store unavailable: {0}")]
    Unavailable(String),

    #[error("Habit store backend error: {0}")]
    Backend(String),
}

/// Port for resolving a habit's current state
#[async_trait]
pub trait HabitStore: Send + Sync {
    /// Resolve a habit by id, `Ok(None)` if the id is unknown.
    async fn get(&self, id: &HabitId) -> Result<Option<Habit>, HabitStoreError>;
}
