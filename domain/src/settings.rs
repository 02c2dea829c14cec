//! Plugin settings snapshot
//!
//! Settings are owned by the host and read as an immutable snapshot per
//! invocation. Missing keys (or a missing snapshot altogether) resolve
//! to the defaults, matching a host store that has never been written.

use crate::quote::catalog::DEFAULT_CATEGORY;
use serde::{Deserialize, Serialize};

/// User-configurable options recognized by the plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotivatorSettings {
    /// Celebrate streak milestones before falling back to quotes
    pub enable_streak_celebration: bool,
    /// Category quotes are drawn from
    pub quote_category: String,
}

impl Default for MotivatorSettings {
    fn default() -> Self {
        Self {
            enable_streak_celebration: true,
            quote_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}
