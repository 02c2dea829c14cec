//! Domain layer for habit-motivator
//!
//! This crate contains the core decision logic and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quote selection
//!
//! Quotes live in a [`QuoteCatalog`]: named categories mapping to fixed,
//! non-empty lists. Selection picks a uniformly random quote from the
//! requested category, silently falling back to the default category
//! when the name is unknown.
//!
//! ## Streak celebration
//!
//! A [`MilestoneTable`] maps notable streak lengths to celebration
//! messages. An arithmetic rule extends coverage to every multiple of
//! 100 beyond the table, so the table itself stays small.

pub mod core;
pub mod habit;
pub mod notification;
pub mod quote;
pub mod settings;
pub mod streak;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use habit::{Habit, HabitId};
pub use notification::{Notification, NotificationKind};
pub use quote::{
    catalog::{DEFAULT_CATEGORY, QuoteCatalog},
    entities::Quote,
};
pub use settings::MotivatorSettings;
pub use streak::milestones::MilestoneTable;
