//! Streak milestone evaluation

pub mod milestones;

pub use milestones::MilestoneTable;
