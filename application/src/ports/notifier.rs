//! Port for showing notifications through the host UI.

use motivator_domain::Notification;

/// Port for rendering a notification.
///
/// `show` is intentionally non-fallible: rendering problems belong to
/// the host, and the worst case for this plugin is that no notification
/// appears.
pub trait Notifier: Send + Sync {
    /// Hand a notification to the host for display.
    fn show(&self, notification: Notification);
}

/// No-op implementation for tests and when output is disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn show(&self, _notification: Notification) {}
}
