//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of `motivator.toml`.
//! They are deserialized directly and converted into domain settings
//! where appropriate.

use motivator_domain::MotivatorSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Plugin settings (`[settings]` section)
    pub settings: FileSettingsConfig,
    /// Habit store selection (`[store]` section)
    pub store: FileStoreConfig,
}

/// Plugin settings from TOML (`[settings]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettingsConfig {
    /// Celebrate streak milestones
    pub enable_streak_celebration: bool,
    /// Category quotes are drawn from
    pub quote_category: String,
}

impl Default for FileSettingsConfig {
    fn default() -> Self {
        let defaults = MotivatorSettings::default();
        Self {
            enable_streak_celebration: defaults.enable_streak_celebration,
            quote_category: defaults.quote_category,
        }
    }
}

impl FileSettingsConfig {
    /// Convert into the domain settings snapshot
    pub fn to_settings(&self) -> MotivatorSettings {
        MotivatorSettings {
            enable_streak_celebration: self.enable_streak_celebration,
            quote_category: self.quote_category.clone(),
        }
    }
}

/// Habit store configuration from TOML (`[store]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path to a JSON habit file; `None` selects the in-memory store
    pub habits_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.settings.to_settings(), MotivatorSettings::default());
        assert!(config.store.habits_file.is_none());
    }

    #[test]
    fn test_settings_section_deserialize() {
        let toml_str = r#"
[settings]
quote_category = "productivity"
enable_streak_celebration = false

[store]
habits_file = "habits.json"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.settings.enable_streak_celebration);
        assert_eq!(config.settings.quote_category, "productivity");
        assert_eq!(
            config.store.habits_file,
            Some(PathBuf::from("habits.json"))
        );
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.settings.enable_streak_celebration);
        assert_eq!(config.settings.quote_category, "motivation");
    }
}
