//! Milestone table and the streak celebration rule

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<MilestoneTable> = LazyLock::new(|| {
    MilestoneTable::new(BTreeMap::from([
        (3, "3 day streak! You're building momentum!".to_string()),
        (7, "One week streak! You're on fire!".to_string()),
        (14, "Two weeks strong! This is becoming a habit!".to_string()),
        (
            21,
            "21 days - they say it takes 21 days to form a habit. You did it!".to_string(),
        ),
        (30, "30 day streak! A full month of consistency!".to_string()),
        (50, "50 days! You're unstoppable!".to_string()),
        (100, "100 DAY STREAK! You're a legend!".to_string()),
        (365, "ONE YEAR STREAK! Absolutely incredible!".to_string()),
    ]))
});

/// Sparse mapping from streak length to celebration message
///
/// Two-tier rule: exact table entries cover the notable early
/// milestones, and every multiple of 100 beyond 100 gets a generated
/// message. The table stays small no matter how long streaks grow.
#[derive(Debug, Clone)]
pub struct MilestoneTable {
    messages: BTreeMap<u32, String>,
}

impl MilestoneTable {
    /// Create a table from explicit milestone entries
    pub fn new(messages: BTreeMap<u32, String>) -> Self {
        Self { messages }
    }

    /// The built-in milestone table shipped with the plugin
    pub fn builtin() -> &'static MilestoneTable {
        &BUILTIN
    }

    /// Celebration message for a streak length, if it is a milestone
    ///
    /// Checked in order, first match wins:
    /// 1. exact table entry;
    /// 2. multiples of 100 above 100 get a generated message;
    /// 3. anything else is not a milestone.
    ///
    /// Rule 2 applies to every qualifying streak, including ones that
    /// fall in gaps below the largest table key.
    pub fn celebration(&self, streak: u32) -> Option<Cow<'_, str>> {
        if let Some(message) = self.messages.get(&streak) {
            return Some(Cow::Borrowed(message));
        }
        if streak > 100 && streak % 100 == 0 {
            return Some(Cow::Owned(format!("{streak} day streak! Phenomenal!")));
        }
        None
    }

    /// Whether a streak length has an exact table entry
    pub fn is_tabulated(&self, streak: u32) -> bool {
        self.messages.contains_key(&streak)
    }

    /// Iterate over the tabulated milestones in ascending order
    pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> {
        self.messages.iter().map(|(day, msg)| (*day, msg.as_str()))
    }
}
