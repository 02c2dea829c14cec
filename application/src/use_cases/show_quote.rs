//! Show Quote use case.
//!
//! Backs the on-demand `show-quote` command: ignore streaks entirely
//! and show one random quote from the configured category. Infallible.

use crate::ports::notifier::Notifier;
use crate::ports::settings_store::SettingsStore;
use motivator_domain::{Notification, QuoteCatalog};
use std::sync::Arc;
use tracing::debug;

/// Use case for showing a quote unconditionally.
pub struct ShowQuoteUseCase {
    settings: Arc<dyn SettingsStore>,
    notifier: Arc<dyn Notifier>,
    catalog: QuoteCatalog,
}

impl ShowQuoteUseCase {
    pub fn new(settings: Arc<dyn SettingsStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            settings,
            notifier,
            catalog: QuoteCatalog::builtin().clone(),
        }
    }

    /// Replace the built-in quote catalog.
    pub fn with_catalog(mut self, catalog: QuoteCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Show one quote from the configured category.
    pub fn execute(&self) {
        let settings = self.settings.get().unwrap_or_default();
        let quote = self.catalog.pick(&settings.quote_category);
        debug!(category = %settings.quote_category, "showing daily quote");
        self.notifier.show(Notification::daily_quote(quote));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motivator_domain::{MotivatorSettings, NotificationKind, Quote};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedSettings(Option<MotivatorSettings>);

    impl SettingsStore for FixedSettings {
        fn get(&self) -> Option<MotivatorSettings> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        shown: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn show(&self, notification: Notification) {
            self.shown.lock().unwrap().push(notification);
        }
    }

    #[test]
    fn test_shows_daily_quote_notification() {
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = ShowQuoteUseCase::new(Arc::new(FixedSettings(None)), notifier.clone());

        use_case.execute();

        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Daily Quote");
        assert_eq!(shown[0].kind, NotificationKind::Info);
    }

    #[test]
    fn test_uses_configured_category() {
        let settings = MotivatorSettings {
            quote_category: "success".to_string(),
            ..Default::default()
        };
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case =
            ShowQuoteUseCase::new(Arc::new(FixedSettings(Some(settings))), notifier.clone());

        use_case.execute();

        let success: Vec<String> = QuoteCatalog::builtin()
            .category("success")
            .iter()
            .map(Quote::attributed)
            .collect();
        let shown = notifier.shown.lock().unwrap();
        assert!(success.contains(&shown[0].message));
    }

    #[test]
    fn test_custom_catalog_is_used() {
        let notifier = Arc::new(RecordingNotifier::default());
        let catalog = QuoteCatalog::new(HashMap::from([(
            "motivation".to_string(),
            vec![Quote::new("Just one more.", "Anon")],
        )]))
        .unwrap();
        let use_case = ShowQuoteUseCase::new(Arc::new(FixedSettings(None)), notifier.clone())
            .with_catalog(catalog);

        use_case.execute();

        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown[0].message, "\"Just one more.\" — Anon");
    }

    #[test]
    fn test_unknown_configured_category_falls_back() {
        let settings = MotivatorSettings {
            quote_category: "does-not-exist".to_string(),
            ..Default::default()
        };
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case =
            ShowQuoteUseCase::new(Arc::new(FixedSettings(Some(settings))), notifier.clone());

        use_case.execute();

        let motivation: Vec<String> = QuoteCatalog::builtin()
            .category("motivation")
            .iter()
            .map(Quote::attributed)
            .collect();
        let shown = notifier.shown.lock().unwrap();
        assert!(motivation.contains(&shown[0].message));
    }
}
