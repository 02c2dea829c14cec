//! Port for reading the plugin settings snapshot.
//!
//! The host owns settings persistence; the plugin only ever reads. A
//! store that has never been written returns `None`, which callers
//! resolve to [`MotivatorSettings::default`].

use motivator_domain::MotivatorSettings;

/// Port for reading the current plugin settings.
///
/// The read is intentionally synchronous: the host hands out an
/// in-memory snapshot, and use cases capture it before any await point.
pub trait SettingsStore: Send + Sync {
    /// Current settings, or `None` if nothing has been stored yet.
    fn get(&self) -> Option<MotivatorSettings>;
}

/// Store that always reports defaults, for tests and headless runs.
pub struct DefaultSettings;

impl SettingsStore for DefaultSettings {
    fn get(&self) -> Option<MotivatorSettings> {
        None
    }
}
